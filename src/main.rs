//! catalog-api server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_api::api::{create_router, AppState, StaticTokens};
use catalog_api::catalog::Catalog;
use catalog_api::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    config.validate().context("invalid configuration")?;

    let catalog = Arc::new(Catalog::seeded());
    tracing::info!(products = catalog.len(), "Catalog loaded");

    let state = build_app_state(&config, catalog);
    let router = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn build_app_state(config: &AppConfig, catalog: Arc<Catalog>) -> AppState {
    let state = AppState::new(catalog);

    if !config.auth.enabled {
        tracing::info!("Authentication disabled; product routes are open");
        return state;
    }

    let tokens = config.auth.active_tokens();
    tracing::info!(tokens = tokens.len(), "Bearer token authentication enabled");
    state.with_authenticator(Arc::new(StaticTokens::new(tokens)))
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
