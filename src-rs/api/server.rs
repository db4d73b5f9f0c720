use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use thiserror::Error;

use crate::api::handlers::{
    handle_add_website, handle_command, handle_health, handle_history, handle_summary,
    handle_websites, AppState,
};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind: {0}")]
    Bind(String),
    #[error("server error: {0}")]
    Serve(String),
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/api/voice-commands",
            get(handle_history).post(handle_command),
        )
        .route("/api/voice-commands/summary", get(handle_summary))
        .route(
            "/api/supported-websites",
            get(handle_websites).post(handle_add_website),
        )
        .with_state(state)
}

pub struct VoiceAgentServer {
    pub port: u16,
    pub state: Arc<AppState>,
}

impl VoiceAgentServer {
    pub fn new(port: u16, state: Arc<AppState>) -> Self {
        Self { port, state }
    }

    pub async fn start(&self) -> Result<(), ServerError> {
        let app = build_router(self.state.clone());
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let server = axum::Server::try_bind(&addr).map_err(|err| ServerError::Bind(err.to_string()))?;
        tracing::info!(%addr, "voice agent listening");
        server
            .serve(app.into_make_service())
            .await
            .map_err(|err| ServerError::Serve(err.to_string()))
    }
}
