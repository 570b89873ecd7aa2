mod chat;
mod config;
mod errors;
mod intake;
mod models;
mod questions;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::intake::reader::PlainTextReader;
use crate::intake::validation::MAX_FILE_SIZE_MB;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting interview API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Uploads: .pdf/.txt up to {}MB, request body limit {} bytes",
        MAX_FILE_SIZE_MB, config.body_limit_bytes
    );
    if let Some(seed) = config.shuffle_seed {
        info!("Deterministic shuffling enabled (seed {seed})");
    }

    let state = AppState {
        config: config.clone(),
        sessions: SessionStore::default(),
        resume_reader: Arc::new(PlainTextReader),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
