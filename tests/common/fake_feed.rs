//! Fake syndicated feed server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1 serving `GET /feed`. The body, status code and response delay
//! can be changed while the server runs, and every hit is counted so cache
//! behaviour can be observed from the outside.

use axum::{extract::State, http::header, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

struct FeedState {
    body: String,
    status: StatusCode,
    delay: Duration,
    hits: usize,
}

/// Handle to the running fake feed server.
pub struct FakeFeedServer {
    addr: SocketAddr,
    state: Arc<Mutex<FeedState>>,
}

impl FakeFeedServer {
    /// Start serving `body` with status 200. Returns once the server is
    /// listening.
    pub async fn start(body: impl Into<String>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(FeedState {
            body: body.into(),
            status: StatusCode::OK,
            delay: Duration::ZERO,
            hits: 0,
        }));

        let app = Router::new()
            .route("/feed", get(serve_feed))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Full URL of the feed (e.g. `http://127.0.0.1:PORT/feed`).
    pub fn feed_url(&self) -> String {
        format!("http://{}/feed", self.addr)
    }

    pub async fn set_status(&self, status: u16) {
        self.state.lock().await.status = StatusCode::from_u16(status).unwrap();
    }

    pub async fn set_delay(&self, delay: Duration) {
        self.state.lock().await.delay = delay;
    }

    pub async fn hits(&self) -> usize {
        self.state.lock().await.hits
    }
}

async fn serve_feed(State(state): State<Arc<Mutex<FeedState>>>) -> impl IntoResponse {
    let (body, status, delay) = {
        let mut state = state.lock().await;
        state.hits += 1;
        (state.body.clone(), state.status, state.delay)
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    (status, [(header::CONTENT_TYPE, "application/rss+xml")], body)
}
