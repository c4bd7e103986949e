use std::net::SocketAddr;
use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::account::service::AccountService;
use account_service::domain::authentication::models::TokenDurations;
use account_service::domain::authentication::service::AuthService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::notifications::KafkaNotificationDispatcher;
use account_service::outbound::repositories::PostgresAccountRepository;
use account_service::outbound::repositories::PostgresSessionRepository;
use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn init_tracing(development: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into());

    if development {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;
    init_tracing(config.is_development());

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Service starting"
    );

    tracing::info!(
        http_port = config.server.http_port,
        kafka_brokers = %config.kafka.brokers,
        kafka_topic = %config.kafka.topic,
        access_token_minutes = config.token.access_token_minutes,
        refresh_token_hours = config.token.refresh_token_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // A key of the wrong size is fatal
    let authenticator = Arc::new(Authenticator::new(config.token.symmetric_key.as_bytes())?);

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let session_repository = Arc::new(PostgresSessionRepository::new(pg_pool));
    let dispatcher = Arc::new(KafkaNotificationDispatcher::new(&config.kafka)?);

    let account_service = Arc::new(AccountService::new(
        Arc::clone(&account_repository),
        dispatcher,
        Arc::clone(&authenticator),
    ));
    let auth_service = Arc::new(AuthService::new(
        account_repository,
        session_repository,
        authenticator,
        TokenDurations {
            access: config.token.access_token_duration(),
            refresh: config.token.refresh_token_duration(),
        },
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(account_service, auth_service);

    axum::serve(
        http_listener,
        http_application.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
