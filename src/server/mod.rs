//! HTTP boundary: one stateless upload handler plus a health check.

mod error;
pub mod handlers;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::planner::{RngSampler, Sampler};

pub use error::ApiError;

/// Builds a fresh [`Sampler`] for each request.
pub type SamplerFactory = Arc<dyn Fn() -> Box<dyn Sampler + Send> + Send + Sync>;

/// Per-router dependencies shared with every request. Holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub sampler_factory: SamplerFactory,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Seeded samplers when `seed` is set, OS entropy otherwise.
    pub fn new(seed: Option<u64>, max_upload_bytes: usize) -> Self {
        let factory = move || -> Box<dyn Sampler + Send> {
            Box::new(RngSampler::from_seed_option(seed))
        };
        Self {
            sampler_factory: Arc::new(factory),
            max_upload_bytes,
        }
    }

    /// Replace how per-request samplers are built.
    pub fn with_sampler_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Sampler + Send> + Send + Sync + 'static,
    {
        self.sampler_factory = Arc::new(factory);
        self
    }

    pub fn sampler(&self) -> Box<dyn Sampler + Send> {
        (self.sampler_factory)()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish_non_exhaustive()
    }
}

impl From<&ServerConfig> for AppState {
    fn from(config: &ServerConfig) -> Self {
        Self::new(config.seed, config.max_upload_bytes)
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/daily-combos", post(handlers::daily_combos))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "daily combos service listening");

    axum::serve(listener, router(AppState::from(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => {
            warn!(error = %err, "cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
