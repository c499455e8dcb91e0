//! Country dial codes and domain-based country pre-selection.

use pl_shared::phone::bare_dial_code;
use serde::{Deserialize, Serialize};

/// Roster of supported countries, in display order: (dial code, name, flag)
const KNOWN_COUNTRIES: [(&str, &str, &str); 8] = [
    ("+971", "UAE", "🇦🇪"),
    ("+966", "Saudi Arabia", "🇸🇦"),
    ("+965", "Kuwait", "🇰🇼"),
    ("+973", "Bahrain", "🇧🇭"),
    ("+974", "Qatar", "🇶🇦"),
    ("+968", "Oman", "🇴🇲"),
    ("+20", "Egypt", "🇪🇬"),
    ("+962", "Jordan", "🇯🇴"),
];

/// Hostname fragments mapped to dial codes, checked in this order
const DOMAIN_COUNTRY_HINTS: [(&str, &str); 8] = [
    ("oman", "+968"),
    ("uae", "+971"),
    ("saudi", "+966"),
    ("kuwait", "+965"),
    ("bahrain", "+973"),
    ("qatar", "+974"),
    ("egypt", "+20"),
    ("jordan", "+962"),
];

const UNKNOWN_COUNTRY_NAME: &str = "Unknown";
const UNKNOWN_COUNTRY_FLAG: &str = "🌍";

/// A selectable country entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCode {
    /// Dial code with leading `+`, e.g. "+968"
    pub dial_code: String,
    pub country_name: String,
    #[serde(rename = "flagGlyph")]
    pub flag: String,
}

impl CountryCode {
    pub fn new(
        dial_code: impl Into<String>,
        country_name: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            dial_code: dial_code.into(),
            country_name: country_name.into(),
            flag: flag.into(),
        }
    }

    /// Look up a dial code (with or without `+`) in the known roster.
    ///
    /// Unknown codes still produce an entry so a backend-configured country
    /// can always be offered.
    pub fn from_dial_code(code: &str) -> Self {
        let bare = bare_dial_code(code);
        KNOWN_COUNTRIES
            .iter()
            .find(|(dial, _, _)| bare_dial_code(dial) == bare)
            .map(|(dial, name, flag)| Self::new(*dial, *name, *flag))
            .unwrap_or_else(|| {
                Self::new(format!("+{}", bare), UNKNOWN_COUNTRY_NAME, UNKNOWN_COUNTRY_FLAG)
            })
    }
}

/// The fixed roster in display order
pub fn known_countries() -> Vec<CountryCode> {
    KNOWN_COUNTRIES
        .iter()
        .map(|(dial, name, flag)| CountryCode::new(*dial, *name, *flag))
        .collect()
}

/// Keep the first entry for every dial code, preserving order
pub fn dedup_by_dial_code(countries: Vec<CountryCode>) -> Vec<CountryCode> {
    let mut unique: Vec<CountryCode> = Vec::with_capacity(countries.len());
    for country in countries {
        if !unique.iter().any(|c| c.dial_code == country.dial_code) {
            unique.push(country);
        }
    }
    unique
}

/// Country shown when a configuration somehow offers none
pub fn fallback_country() -> CountryCode {
    let (dial, name, flag) = KNOWN_COUNTRIES[0];
    CountryCode::new(dial, name, flag)
}

/// Pick the initial country for a session.
///
/// The domain is matched case-insensitively against the hint table; the first
/// hint whose dial code is offered wins. Otherwise the first offered entry.
pub fn default_country(countries: &[CountryCode], domain: Option<&str>) -> CountryCode {
    if let Some(domain) = domain {
        let domain = domain.to_lowercase();
        let matched = DOMAIN_COUNTRY_HINTS
            .iter()
            .filter(|(hint, _)| domain.contains(hint))
            .find_map(|(_, dial)| countries.iter().find(|c| c.dial_code == *dial));
        if let Some(country) = matched {
            return country.clone();
        }
    }

    countries.first().cloned().unwrap_or_else(fallback_country)
}
