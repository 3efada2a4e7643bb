use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

mod app_state;
mod auth;
mod config;
mod domain;
mod repositories;
mod router;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::from_filename("./mastery-api/.env.local").ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mastery_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = config::read_config().expect("Failed to read configuration");

    let connection_pool = PgPoolOptions::new().connect_lazy_with(config.database.with_db());
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to run database migrations");

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .expect("Failed to bind address");
    tracing::info!("listening on {}", address);

    let app = router::create(connection_pool, config);
    axum::serve(listener, app)
        .await
        .expect("Failed to run server");
}
