use actix_web::{web, HttpServer};
use tracing::info;

use pl_api::app::create_app;
use pl_api::config::Config;
use pl_api::logging::init_logging;
use pl_api::routes::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (reads .env first)
    let config = Config::from_env();

    init_logging(&config.app.logging);

    info!(
        environment = %config.app.environment,
        "Starting PinLanding API Server"
    );

    let services = pl_infra::initialize(&config.app)?;

    let app_state = web::Data::new(AppState::new(
        services.landing_page_client,
        services.pin_service,
        config.app.landing.clone(),
    ));

    let bind_address = config.app.server.bind_address();
    info!(bind_address = %bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config));
    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
