//! Fake evaluation service for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `POST /api/v1/query` — parses the multipart claim form, remembers it,
//!   and answers with whatever status and body the test configured.
//!
//! # Example
//!
//! ```rust,no_run
//! let upstream = FakeUpstream::start().await.unwrap();
//! upstream.reply_with(200, VALID_RECORD).await;
//! let client = EvaluationClient::new(&upstream.endpoint(), Duration::from_secs(5)).unwrap();
//! ```

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// One claim form as the server parsed it.
#[derive(Debug, Clone, Default)]
pub struct ReceivedForm {
    pub file_name: Option<String>,
    pub file_content_type: Option<String>,
    pub file_bytes: Vec<u8>,
    pub query: Option<String>,
}

/// State shared between the router and test code.
struct UpstreamState {
    status: StatusCode,
    body: String,
    received: Vec<ReceivedForm>,
}

impl Default for UpstreamState {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            body: "{}".to_string(),
            received: Vec::new(),
        }
    }
}

/// Handle to the running fake evaluation service.
pub struct FakeUpstream {
    addr: SocketAddr,
    state: Arc<Mutex<UpstreamState>>,
}

impl FakeUpstream {
    /// Start the server on a random port. Returns once the server is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(UpstreamState::default()));

        let app = Router::new()
            .route("/api/v1/query", post(evaluate))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Full URL of the claim endpoint.
    pub fn endpoint(&self) -> String {
        format!("http://{}/api/v1/query", self.addr)
    }

    /// Configure the next answers.
    pub async fn reply_with(&self, status: u16, body: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.status = StatusCode::from_u16(status).unwrap();
        state.body = body.into();
    }

    /// Every form received so far, oldest first.
    pub async fn received(&self) -> Vec<ReceivedForm> {
        self.state.lock().await.received.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn evaluate(
    State(state): State<Arc<Mutex<UpstreamState>>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut form = ReceivedForm::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                form.file_name = field.file_name().map(str::to_owned);
                form.file_content_type = field.content_type().map(str::to_owned);
                form.file_bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            }
            Some("query") => {
                form.query = field.text().await.ok();
            }
            _ => {}
        }
    }

    let mut state = state.lock().await;
    state.received.push(form);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
