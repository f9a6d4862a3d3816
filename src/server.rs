//! HTTP surface: `GET /api/content-feed` (path configurable) and `/healthz`.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use folio_core::config::Config;
use folio_core::{FeedResponse, ResponseShape};
use folio_feeds::{Aggregator, FeedCache};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// State shared by every request. Nothing in here is written per request
/// except the cache slot.
#[derive(Clone)]
pub struct AppState {
    aggregator: Arc<Aggregator>,
    cache: Arc<FeedCache>,
    shape: ResponseShape,
}

impl AppState {
    pub fn new(aggregator: Aggregator, cache: FeedCache, shape: ResponseShape) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            cache: Arc::new(cache),
            shape,
        }
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            Aggregator::from_config(cfg)?,
            FeedCache::new(Duration::from_secs(cfg.cache.ttl_secs)),
            cfg.response.shape,
        ))
    }

    /// Aggregate (or reuse a fresh aggregation) and shape the response.
    pub async fn respond(&self) -> FeedResponse {
        let aggregation = self
            .cache
            .get_or_refresh(|| self.aggregator.aggregate())
            .await;
        FeedResponse::from_aggregation(&aggregation, self.shape)
    }
}

pub fn router(state: AppState, route: &str) -> Router {
    Router::new()
        .route(route, get(content_feed))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn content_feed(State(state): State<AppState>) -> impl IntoResponse {
    let response = state.respond().await;
    let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Bind and serve until Ctrl-C.
pub async fn serve(cfg: &Config, bind: Option<&str>) -> anyhow::Result<()> {
    let state = AppState::from_config(cfg)?;
    let addr = bind.unwrap_or(&cfg.server.bind);
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, route = %cfg.server.route, "serving content feed");

    axum::serve(listener, router(state, &cfg.server.route))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

/// Resolves when `signal` fires. A signal that cannot be installed never
/// resolves, so the server keeps running instead of exiting silently.
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
