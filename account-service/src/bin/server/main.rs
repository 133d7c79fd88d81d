use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::auth::ports::AuthServicePort;
use account_service::domain::auth::service::AuthService;
use account_service::domain::user::ports::UserRepository;
use account_service::domain::user::ports::UserServicePort;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryUserRepository;
use account_service::outbound::repositories::PostgresUserRepository;
use auth::TokenService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "account_service=debug,auth=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_address = %config.http_address(),
        jwt_algorithm = %config.jwt.algorithm,
        access_token_expire_minutes = config.jwt.access_token_expire_minutes,
        "Configuration loaded"
    );

    let tokens = Arc::new(TokenService::new(&config.token_settings())?);

    let (user_service, auth_service) = if config.database.is_memory() {
        tracing::warn!(database = "memory", "Using in-memory user store; data is not persisted");
        build_services(InMemoryUserRepository::new(), tokens)
    } else {
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

        build_services(PostgresUserRepository::new(pg_pool), tokens)
    };

    let http_address = config.http_address();
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(user_service, auth_service)).await?;

    tracing::info!("Server exited");

    Ok(())
}

fn build_services<R>(
    repository: R,
    tokens: Arc<TokenService>,
) -> (Arc<dyn UserServicePort>, Arc<dyn AuthServicePort>)
where
    R: UserRepository,
{
    let user_service = Arc::new(UserService::new(Arc::new(repository)));
    let auth_service: Arc<dyn AuthServicePort> =
        Arc::new(AuthService::new(Arc::clone(&user_service), tokens));
    let user_service: Arc<dyn UserServicePort> = user_service;

    (user_service, auth_service)
}
