//! One-time initialization run before the server starts accepting requests.

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::{admin::code::AdminCodeService, gateway::PaymentGateway},
};

/// Sessions expire after a week without requests.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's SQLite pool.
///
/// Migrates the session table, then configures the cookie with a seven-day inactivity
/// expiry. The cookie is marked `Secure` when `SESSION_SECURE` is enabled.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok(session)
}

/// Builds the CORS layer for the configured frontend origins.
///
/// Credentials are allowed so the session cookie is sent cross-origin, which requires
/// explicit origins, methods and headers.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing the configured origins
/// - `Err(ConfigError::InvalidValue)` - An origin is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                var: "CORS_ORIGINS".to_string(),
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true))
}

/// Builds the HTTP client used for outbound gateway requests.
///
/// Redirects are disabled so the secret key is never forwarded to another host.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
}

/// Creates the card payment gateway client when a secret key is configured.
pub fn setup_payment_gateway(
    config: &Config,
    http_client: reqwest::Client,
) -> Option<PaymentGateway> {
    match &config.stripe_secret_key {
        Some(secret_key) => Some(PaymentGateway::new(
            http_client,
            config.stripe_api_url.clone(),
            secret_key.clone(),
        )),
        None => {
            tracing::warn!("STRIPE_SECRET_KEY is not set; card payments are disabled");
            None
        }
    }
}

/// Checks for an admin account and prints a bootstrap code if there is none.
///
/// The code lets the first person to register with it become an admin. It expires after
/// a few minutes; restart the server to get a new one.
///
/// # Returns
/// - `Ok(())` - Admin exists, or a code was generated and logged
/// - `Err(AppError::DbErr)` - Failed to query users
pub async fn check_for_admin(
    db: &DatabaseConnection,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin account exists. Register with admin code {} within {} minutes to create one.",
        code,
        crate::server::service::admin::code::ADMIN_CODE_TTL.as_secs() / 60
    );

    Ok(())
}
