//! HTTP route handlers
//!
//! A page load resolves the landing page configuration for its `Host` once;
//! the PIN endpoints find it again through the click id issued with the page.
//! Verification sessions themselves are rebuilt from each request body.

pub mod health;
pub mod page;
pub mod pin;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpRequest};
use pl_core::domain::entities::{ClickId, Configuration};
use pl_core::services::resolver::{ConfigResolver, LandingPageClient};
use pl_core::services::verification::{PinServiceTrait, VerificationFlowConfig};
use pl_shared::LandingConfig;

use crate::sessions::PageSessions;

/// Application state that holds shared services
pub struct AppState<L, P>
where
    L: LandingPageClient,
    P: PinServiceTrait,
{
    pub resolver: ConfigResolver<L>,
    pub pin_service: Arc<P>,
    pub flow_config: VerificationFlowConfig,
    pub page_sessions: PageSessions,
}

impl<L, P> AppState<L, P>
where
    L: LandingPageClient,
    P: PinServiceTrait,
{
    pub fn new(landing_page_client: Arc<L>, pin_service: Arc<P>, landing: LandingConfig) -> Self {
        let ttl = Duration::from_secs(landing.page_session_ttl_secs);
        Self {
            resolver: ConfigResolver::new(landing_page_client, landing),
            pin_service,
            flow_config: VerificationFlowConfig::default(),
            page_sessions: PageSessions::new(ttl),
        }
    }

    /// Resolve the configuration for a new page load and pin it to `click_id`
    pub(crate) async fn open_page(
        &self,
        req: &HttpRequest,
        click_id: &ClickId,
    ) -> Arc<Configuration> {
        let host = req.connection_info().host().to_string();
        let configuration = Arc::new(self.resolver.resolve(Some(&host)).await);
        self.page_sessions.open(click_id, configuration)
    }

    /// The configuration of the page load behind `click_id`.
    ///
    /// Click ids this process has not issued (or that expired) start a page
    /// load of their own, so later calls with the same id stay consistent.
    pub(crate) async fn configuration_for(
        &self,
        req: &HttpRequest,
        click_id: &ClickId,
    ) -> Arc<Configuration> {
        match self.page_sessions.get(click_id) {
            Some(configuration) => configuration,
            None => {
                tracing::debug!(
                    click_id = %click_id,
                    event = "page_session_missing",
                    "No live page load for click id, resolving configuration"
                );
                self.open_page(req, click_id).await
            }
        }
    }
}

/// Register the landing page routes under `/api/v1`
pub fn configure<L, P>(cfg: &mut web::ServiceConfig)
where
    L: LandingPageClient + 'static,
    P: PinServiceTrait + 'static,
{
    cfg.route("/page", web::get().to(page::page::<L, P>))
        .service(
            web::scope("/pin")
                .route("/request", web::post().to(pin::request_pin::<L, P>))
                .route("/verify", web::post().to(pin::verify_pin::<L, P>)),
        );
}
