//! Application factory
//!
//! Builds the Actix-web application around an [`AppState`]; the binary and
//! the tests share it.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

use pl_core::services::resolver::LandingPageClient;
use pl_core::services::verification::PinServiceTrait;

use crate::config::Config;
use crate::handlers::not_found;
use crate::middleware::cors::create_cors;
use crate::routes::{self, health::health_check, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<L, P>(
    app_state: web::Data<AppState<L, P>>,
    config: &Config,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    L: LandingPageClient + 'static,
    P: PinServiceTrait + 'static,
{
    App::new()
        .app_data(app_state)
        // Middleware runs bottom-up: CORS first, then the request span
        .wrap(TracingLogger::default())
        .wrap(create_cors(config))
        .route("/health", web::get().to(health_check))
        .service(web::scope("/api/v1").configure(routes::configure::<L, P>))
        .default_service(web::route().to(not_found))
}
