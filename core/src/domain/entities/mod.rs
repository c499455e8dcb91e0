//! Domain entities: landing configuration, countries and the verification session.

pub mod configuration;
pub mod country;
pub mod session;

pub use configuration::{
    available_languages, normalize_newlines, Configuration, LanguageOption, OpaqueId, Translations,
};
pub use country::{default_country, dedup_by_dial_code, known_countries, CountryCode};
pub use session::{ClickId, Completion, Stage, VerificationSession};
