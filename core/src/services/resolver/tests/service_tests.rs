//! Tests for the configuration resolver

use std::sync::Arc;

use pl_shared::config::LandingConfig;
use pl_shared::types::TextDirection;
use serde_json::json;

use super::mocks::MockLandingPageClient;
use crate::domain::entities::{Configuration, OpaqueId};
use crate::errors::RemoteError;
use crate::services::resolver::{resolve_hostname, ConfigResolver, ResolveDomainResponse};

fn sample_response() -> ResolveDomainResponse {
    serde_json::from_value(json!({
        "landing_page": {
            "id": 1,
            "domain_name": "otplanding.netlify.app",
            "domain_url": "http://oman.kidoz.xyz",
            "country_code": "968",
            "country_name": "Oman",
            "footer_text": "Line one\\nLine two",
            "bg_color": "#000000",
            "submit_button_text": "Subscribe",
            "language": "ar",
            "redirect_url": "https://kidzoo.gotclick.site/",
            "is_active": true,
            "created_at": "2026-01-29T11:05:19.595853+05:30",
            "landing_page": 1,
            "campaign": 22
        },
        "campaign": {
            "id": 22,
            "service_id": 37,
            "publisher_id": 13,
            "created_at": "2025-09-04T19:14:13.202000+05:30",
            "is_active": true
        }
    }))
    .unwrap()
}

fn build_resolver(client: MockLandingPageClient) -> (ConfigResolver<MockLandingPageClient>, Arc<MockLandingPageClient>) {
    let client = Arc::new(client);
    (ConfigResolver::new(client.clone(), LandingConfig::default()), client)
}

fn assert_complete(config: &Configuration) {
    assert!(!config.country_codes.is_empty());
    let t = &config.translations;
    for value in [&t.title, &t.subtitle, &t.input_placeholder, &t.button_text, &t.error_message] {
        assert!(!value.is_empty());
    }
}

#[test]
fn test_resolve_hostname_precedence() {
    assert_eq!(resolve_hostname(Some("override.example"), Some("host.example"), "localhost"), "override.example");
    assert_eq!(resolve_hostname(None, Some("host.example"), "localhost"), "host.example");
    assert_eq!(resolve_hostname(Some("  "), Some("host.example"), "localhost"), "host.example");
    assert_eq!(resolve_hostname(None, None, "localhost"), "localhost");
    assert_eq!(resolve_hostname(None, Some(""), "localhost"), "localhost");
}

#[test]
fn test_resolve_hostname_strips_port() {
    assert_eq!(resolve_hostname(None, Some("oman.example:3000"), "localhost"), "oman.example");
    assert_eq!(resolve_hostname(None, Some("[::1]:8080"), "localhost"), "[::1]");
    assert_eq!(resolve_hostname(None, Some("localhost"), "fallback"), "localhost");
}

#[tokio::test]
async fn test_resolve_maps_active_landing_page() {
    let (resolver, client) = build_resolver(MockLandingPageClient::returning(sample_response()));

    let config = resolver.resolve(Some("oman.kidoz.xyz")).await;

    assert_eq!(client.requested(), vec!["oman.kidoz.xyz".to_string()]);
    assert_eq!(config.primary_color, "#000000");
    assert_eq!(config.background_color, "#000000");
    assert_eq!(config.secondary_color, "#ffffff");
    assert_eq!(config.accent_color, "#f87171");
    assert_eq!(config.language, "ar");
    assert_eq!(config.text_direction(), TextDirection::Rtl);
    assert_eq!(config.footer_text, "Line one\nLine two");
    assert_eq!(config.translations.button_text, "Subscribe");
    assert_eq!(config.translations.title, "Your file is ready");
    assert_eq!(config.service_id, OpaqueId::new(37));
    assert_eq!(config.publisher_id, OpaqueId::new(13));
    assert_eq!(config.redirect_url.as_deref(), Some("https://kidzoo.gotclick.site/"));
    assert_eq!(config.domain.as_deref(), Some("oman.kidoz.xyz"));
    assert_eq!(config.landing_page_id, Some(1));
    assert_eq!(config.landing_page_name.as_deref(), Some("otplanding.netlify.app"));
    assert_eq!(config.campaign_id, Some(22));
    assert_eq!(config.available_languages.len(), 2);
    assert_complete(&config);
}

#[tokio::test]
async fn test_api_country_promoted_and_deduplicated() {
    let (resolver, _) = build_resolver(MockLandingPageClient::returning(sample_response()));

    let config = resolver.resolve(Some("oman.kidoz.xyz")).await;

    assert_eq!(config.country_codes[0].dial_code, "+968");
    assert_eq!(config.country_codes[0].country_name, "Oman");
    assert_eq!(config.country_codes.len(), 8);
    assert_eq!(
        config.country_codes.iter().filter(|c| c.dial_code == "+968").count(),
        1
    );
    // Roster order is kept for the rest
    assert_eq!(config.country_codes[1].dial_code, "+971");
}

#[tokio::test]
async fn test_unknown_api_country_is_offered_first() {
    let mut response = sample_response();
    response.landing_page.as_mut().unwrap().country_code = Some(json!(44));
    let (resolver, _) = build_resolver(MockLandingPageClient::returning(response));

    let config = resolver.resolve(Some("uk.example")).await;

    assert_eq!(config.country_codes.len(), 9);
    assert_eq!(config.country_codes[0].dial_code, "+44");
    assert_eq!(config.country_codes[0].country_name, "Unknown");
}

#[tokio::test]
async fn test_missing_fields_use_fallbacks() {
    let response: ResolveDomainResponse = serde_json::from_value(json!({
        "landing_page": { "is_active": true, "bg_color": "", "footer_text": null },
        "campaign": null
    }))
    .unwrap();
    let (resolver, _) = build_resolver(MockLandingPageClient::returning(response));

    let config = resolver.resolve(Some("plain.example")).await;

    assert_eq!(config.primary_color, "#00C2E0");
    assert_eq!(config.background_color, "#EAF8F9");
    assert_eq!(config.language, "en");
    assert_eq!(
        config.footer_text,
        "By subscribing to the service, you agree to the following terms and conditions."
    );
    assert_eq!(config.translations.button_text, "CONTINUE");
    assert_eq!(config.service_id, OpaqueId::new(37));
    assert_eq!(config.publisher_id, OpaqueId::new(13));
    assert!(config.redirect_url.is_none());
    assert_eq!(config.country_codes[0].dial_code, "+971");
    assert_eq!(config.domain.as_deref(), Some("plain.example"));
    assert_complete(&config);
}

#[tokio::test]
async fn test_inactive_landing_page_returns_default() {
    let mut response = sample_response();
    response.landing_page.as_mut().unwrap().is_active = Some(false);
    let (resolver, _) = build_resolver(MockLandingPageClient::returning(response));

    let config = resolver.resolve(Some("oman.kidoz.xyz")).await;

    assert_eq!(config, Configuration::default_for(&LandingConfig::default()));
}

#[tokio::test]
async fn test_missing_landing_page_returns_default() {
    let (resolver, _) = build_resolver(MockLandingPageClient::returning(ResolveDomainResponse::default()));

    let config = resolver.resolve(None).await;

    assert_eq!(config, resolver.default_configuration());
}

#[tokio::test]
async fn test_remote_failures_return_default() {
    let failures = vec![
        RemoteError::Timeout,
        RemoteError::Transport { message: "connection refused".into() },
        RemoteError::Status { status: 500 },
        RemoteError::Decode { message: "expected value".into() },
    ];

    for failure in failures {
        let (resolver, client) = build_resolver(MockLandingPageClient::failing(failure));
        let config = resolver.resolve(Some("any.example")).await;
        assert_eq!(config, Configuration::default_for(&LandingConfig::default()));
        assert_complete(&config);
        // One attempt, no retries
        assert_eq!(client.requested().len(), 1);
    }
}

#[tokio::test]
async fn test_override_domain_wins() {
    let client = Arc::new(MockLandingPageClient::returning(sample_response()));
    let landing = LandingConfig {
        override_domain: Some("oman.kidoz.xyz".to_string()),
        ..LandingConfig::default()
    };
    let resolver = ConfigResolver::new(client.clone(), landing);

    let config = resolver.resolve(Some("localhost:3000")).await;

    assert_eq!(client.requested(), vec!["oman.kidoz.xyz".to_string()]);
    assert_eq!(config.domain.as_deref(), Some("oman.kidoz.xyz"));
}

#[tokio::test]
async fn test_fallback_domain_when_nothing_detected() {
    let (resolver, client) = build_resolver(MockLandingPageClient::returning(sample_response()));

    resolver.resolve(None).await;

    assert_eq!(client.requested(), vec!["localhost".to_string()]);
}

#[tokio::test]
async fn test_string_identifiers_forwarded_verbatim() {
    let mut response = sample_response();
    let campaign = response.campaign.as_mut().unwrap();
    campaign.service_id = Some(json!("svc-37"));
    campaign.publisher_id = Some(json!("pub-13"));
    let (resolver, _) = build_resolver(MockLandingPageClient::returning(response));

    let config = resolver.resolve(Some("oman.kidoz.xyz")).await;

    assert_eq!(config.service_id, OpaqueId::new("svc-37"));
    assert_eq!(config.publisher_id, OpaqueId::new("pub-13"));
}
