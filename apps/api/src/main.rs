mod assistant;
mod auth;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod pipeline;
mod profiles;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::resume::PdfTextExtractor;
use crate::auth::TokenVerifier;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::OpenAiClient;
use crate::pipeline::catalog::JobCatalog;
use crate::profiles::PgProfileStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerLink API v{}", env!("CARGO_PKG_VERSION"));

    // Profile store
    let db = create_pool(&config.database_url).await?;
    let profiles = Arc::new(PgProfileStore::new(db));

    // Completion client
    let completion = OpenAiClient::new(&config)?;
    info!(
        "Completion client initialized (model: {}, timeout: {}s)",
        completion.model(),
        config.llm_timeout.as_secs()
    );

    // Job catalog
    let catalog = match &config.job_catalog_path {
        Some(path) => JobCatalog::from_file(path)?,
        None => JobCatalog::builtin(),
    };
    info!("Job catalog loaded: {} listings", catalog.listings().len());

    // Upload directory for resume temp files
    std::fs::create_dir_all(&config.upload_dir).with_context(|| {
        format!(
            "creating upload directory {}",
            config.upload_dir.display()
        )
    })?;

    let state = AppState {
        profiles,
        completion: Arc::new(completion),
        extractor: Arc::new(PdfTextExtractor),
        catalog: Arc::new(catalog),
        verifier: Arc::new(TokenVerifier::new(&config.jwt_secret)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web client's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
