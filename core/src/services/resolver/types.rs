//! Wire types of the landing page resolution endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /api/lp/resolve-lp-domain/?domain=<hostname>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveDomainResponse {
    #[serde(default)]
    pub landing_page: Option<LandingPageRecord>,
    #[serde(default)]
    pub campaign: Option<CampaignRecord>,
}

/// Landing page entity as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingPageRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub domain_name: Option<String>,
    /// Dial code without `+`; the backend sends it as a string but numbers are accepted
    #[serde(default)]
    pub country_code: Option<Value>,
    #[serde(default)]
    pub footer_text: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub submit_button_text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    /// Missing counts as inactive
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl LandingPageRecord {
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    /// Country code as text, `None` when absent or blank
    pub fn country_code_text(&self) -> Option<String> {
        match self.country_code.as_ref()? {
            Value::String(s) => non_empty(Some(s.clone())),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Campaign entity linked to a landing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub service_id: Option<Value>,
    #[serde(default)]
    pub publisher_id: Option<Value>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Blank strings count as absent
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
