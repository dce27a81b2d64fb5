mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, service::admin::code::AdminCodeService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let cors = startup::setup_cors(&config)?;
    let http_client = startup::setup_reqwest_client();
    let payment_gateway = startup::setup_payment_gateway(&config, http_client);

    let admin_code_service = AdminCodeService::new();

    // Check for admin users and print a bootstrap code if none exist
    startup::check_for_admin(&db, &admin_code_service).await?;

    let app = router::router()
        .with_state(AppState::new(
            db,
            admin_code_service,
            payment_gateway,
            config.tax_rate,
            config.service_charge_rate,
            config.currency.clone(),
        ))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
