//! Resolved landing page configuration.
//!
//! A `Configuration` is produced once per page load by the configuration
//! resolver and treated as immutable afterwards. It carries everything the
//! rendering layer and the verification flow need: colors, copy, countries,
//! and the campaign identifiers forwarded to the PIN service.

use pl_shared::config::LandingConfig;
use pl_shared::types::{Language, TextDirection};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::country::{known_countries, CountryCode};

pub const DEFAULT_PRIMARY_COLOR: &str = "#00C2E0";
pub const DEFAULT_SECONDARY_COLOR: &str = "#ffffff";
pub const DEFAULT_ACCENT_COLOR: &str = "#f87171";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#EAF8F9";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Footer shown when no landing page could be resolved
pub const DEFAULT_FOOTER_TEXT: &str = "By subscribing to the service, you agree to the following terms and conditions: A standard subscription fee applies. To unsubscribe, send 'STOP' to 1234.";

/// Footer shown for a resolved landing page without footer text
pub const RESOLVED_FOOTER_FALLBACK: &str =
    "By subscribing to the service, you agree to the following terms and conditions.";

/// Identifier forwarded verbatim to the PIN service.
///
/// The backend hands out numbers today, but nothing here depends on that;
/// whatever JSON value was received is sent back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueId(Value);

impl OpaqueId {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `None` for JSON null and empty strings
    pub fn from_optional(value: Option<Value>) -> Option<Self> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(v) => Some(Self(v)),
        }
    }
}

impl std::fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

/// UI copy with hardcoded fallbacks for every key the flow uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub title: String,
    pub subtitle: String,
    pub input_placeholder: String,
    pub button_text: String,
    pub error_message: String,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            title: "Your file is ready".to_string(),
            subtitle: "Enter your phone number and confirm the PIN code".to_string(),
            input_placeholder: "Mobile number".to_string(),
            button_text: "CONTINUE".to_string(),
            error_message: "Please insert your phone number".to_string(),
        }
    }
}

/// Entry of the language switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

impl From<Language> for LanguageOption {
    fn from(language: Language) -> Self {
        Self {
            code: language.code().to_string(),
            label: language.label().to_string(),
        }
    }
}

/// Switcher entries: Arabic, English
pub fn available_languages() -> Vec<LanguageOption> {
    Language::SWITCHER.iter().copied().map(LanguageOption::from).collect()
}

/// Landing page configuration resolved for one page load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub language: String,
    pub footer_text: String,
    /// Never empty
    pub country_codes: Vec<CountryCode>,
    pub translations: Translations,
    pub available_languages: Vec<LanguageOption>,
    pub service_id: OpaqueId,
    pub publisher_id: OpaqueId,
    pub redirect_url: Option<String>,
    /// Hostname the configuration was resolved for
    pub domain: Option<String>,
    pub landing_page_id: Option<i64>,
    pub landing_page_name: Option<String>,
    pub campaign_id: Option<i64>,
}

impl Configuration {
    /// The built-in configuration used whenever resolution fails
    pub fn default_for(landing: &LandingConfig) -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
            country_codes: known_countries(),
            translations: Translations::default(),
            available_languages: available_languages(),
            service_id: OpaqueId::new(landing.default_service_id.clone()),
            publisher_id: OpaqueId::new(landing.default_publisher_id.clone()),
            redirect_url: None,
            domain: None,
            landing_page_id: None,
            landing_page_name: None,
            campaign_id: None,
        }
    }

    pub fn text_direction(&self) -> TextDirection {
        TextDirection::for_language_code(&self.language)
    }

    /// Offered country with the given dial code
    pub fn country(&self, dial_code: &str) -> Option<&CountryCode> {
        self.country_codes.iter().find(|c| c.dial_code == dial_code)
    }
}

/// Turn literal `\n` escape sequences into real newlines
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
