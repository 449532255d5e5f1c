//! NUMO Oracle server entry point.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use numo_oracle::adapters::ai::build_provider;
use numo_oracle::adapters::cards::StaticCardCatalog;
use numo_oracle::adapters::http::{api_router, AppState};
use numo_oracle::adapters::reports::PgReportRepository;
use numo_oracle::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| {
            EnvFilter::new("info,numo_oracle=debug,sqlx=warn")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        port = config.server.port,
        "starting numo-oracle"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    let ai_provider = build_provider(&config.ai)?;
    tracing::info!(
        provider = %ai_provider.provider_info().name,
        model = %ai_provider.provider_info().model,
        "AI provider ready"
    );

    let state = AppState {
        ai_provider,
        card_catalog: Arc::new(StaticCardCatalog::new()),
        report_repository: Arc::new(PgReportRepository::new(pool)),
    };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
