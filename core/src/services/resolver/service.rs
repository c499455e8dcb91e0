//! Configuration resolver implementation

use std::sync::Arc;

use pl_shared::config::LandingConfig;

use crate::domain::entities::configuration::{
    available_languages, normalize_newlines, Configuration, OpaqueId, Translations,
    DEFAULT_ACCENT_COLOR, DEFAULT_BACKGROUND_COLOR, DEFAULT_LANGUAGE, DEFAULT_PRIMARY_COLOR,
    DEFAULT_SECONDARY_COLOR, RESOLVED_FOOTER_FALLBACK,
};
use crate::domain::entities::country::{dedup_by_dial_code, known_countries, CountryCode};

use super::traits::LandingPageClient;
use super::types::{non_empty, ResolveDomainResponse};

/// Pick the hostname a page is resolved for.
///
/// Precedence: explicit override, then the detected host (a `Host` header
/// value may carry a port, which is dropped), then the fallback.
pub fn resolve_hostname(
    override_domain: Option<&str>,
    detected_host: Option<&str>,
    fallback: &str,
) -> String {
    fn pick(value: Option<&str>) -> Option<&str> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(strip_port)
            .filter(|v| !v.is_empty())
    }

    pick(override_domain)
        .or_else(|| pick(detected_host))
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // IPv6 literal, keep the brackets
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port))
            if !name.contains(':') && !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) =>
        {
            name
        }
        _ => host,
    }
}

/// Resolves the landing page configuration for a hostname.
///
/// Resolution never fails: transport errors, bad status codes, undecodable
/// bodies and inactive landing pages all yield the default configuration.
pub struct ConfigResolver<L: LandingPageClient> {
    /// Remote landing page lookup
    client: Arc<L>,
    /// Hostname precedence and fallback identifiers
    landing: LandingConfig,
}

impl<L: LandingPageClient> ConfigResolver<L> {
    pub fn new(client: Arc<L>, landing: LandingConfig) -> Self {
        Self { client, landing }
    }

    /// The configuration returned whenever resolution fails
    pub fn default_configuration(&self) -> Configuration {
        Configuration::default_for(&self.landing)
    }

    /// Hostname the resolver would query for a detected host
    pub fn hostname_for(&self, detected_host: Option<&str>) -> String {
        resolve_hostname(
            self.landing.override_domain.as_deref(),
            detected_host,
            &self.landing.fallback_domain,
        )
    }

    /// Resolve the configuration for a page load.
    ///
    /// # Arguments
    ///
    /// * `detected_host` - Hostname seen by the caller, e.g. the inbound `Host` header
    pub async fn resolve(&self, detected_host: Option<&str>) -> Configuration {
        let domain = self.hostname_for(detected_host);

        tracing::info!(
            domain = %domain,
            event = "config_resolution_started",
            "Resolving landing page configuration"
        );

        let response = match self.client.resolve_domain(&domain).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    domain = %domain,
                    error = %e,
                    event = "config_resolution_failed",
                    "Landing page lookup failed, using default configuration"
                );
                return self.default_configuration();
            }
        };

        match self.map_response(response, &domain) {
            Some(config) => {
                tracing::info!(
                    domain = %domain,
                    background_color = %config.background_color,
                    button_text = %config.translations.button_text,
                    country_code = %config.country_codes[0].dial_code,
                    language = %config.language,
                    redirect_url = ?config.redirect_url,
                    event = "config_resolved",
                    "Landing page configuration resolved"
                );
                config
            }
            None => {
                tracing::warn!(
                    domain = %domain,
                    event = "landing_page_inactive",
                    "Landing page missing or inactive, using default configuration"
                );
                self.default_configuration()
            }
        }
    }

    /// Map a lookup response into a configuration.
    ///
    /// Returns `None` when the landing page is missing or not active.
    pub fn map_response(
        &self,
        response: ResolveDomainResponse,
        domain: &str,
    ) -> Option<Configuration> {
        let landing_page = response.landing_page.filter(|lp| lp.is_active())?;
        let campaign = response.campaign.unwrap_or_default();

        let bg_color = non_empty(landing_page.bg_color.clone());

        let mut countries: Vec<CountryCode> = Vec::new();
        if let Some(code) = landing_page.country_code_text() {
            countries.push(CountryCode::from_dial_code(&code));
        }
        countries.extend(known_countries());

        let translations = Translations {
            button_text: non_empty(landing_page.submit_button_text.clone())
                .unwrap_or_else(|| Translations::default().button_text),
            ..Translations::default()
        };

        Some(Configuration {
            primary_color: bg_color.clone().unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            background_color: bg_color.unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
            language: non_empty(landing_page.language.clone())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            footer_text: non_empty(landing_page.footer_text.clone())
                .map(|text| normalize_newlines(&text))
                .unwrap_or_else(|| RESOLVED_FOOTER_FALLBACK.to_string()),
            country_codes: dedup_by_dial_code(countries),
            translations,
            available_languages: available_languages(),
            service_id: OpaqueId::from_optional(campaign.service_id)
                .unwrap_or_else(|| OpaqueId::new(self.landing.default_service_id.clone())),
            publisher_id: OpaqueId::from_optional(campaign.publisher_id)
                .unwrap_or_else(|| OpaqueId::new(self.landing.default_publisher_id.clone())),
            redirect_url: non_empty(landing_page.redirect_url.clone()),
            domain: Some(domain.to_string()),
            landing_page_id: landing_page.id,
            landing_page_name: non_empty(landing_page.domain_name.clone()),
            campaign_id: campaign.id,
        })
    }
}
