use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::directory::DirectoryError;
use crate::history::{CommandHistory, CommandLog, HistorySummary};
use crate::interpreter::CommandInterpreter;
use crate::result::CommandResult;

/// Shared by every request.
pub struct AppState {
    pub interpreter: CommandInterpreter,
    pub history: CommandHistory,
    pub history_limit: usize,
}

impl AppState {
    pub fn new(interpreter: CommandInterpreter, history_limit: usize) -> Self {
        Self {
            interpreter,
            history: CommandHistory::new(),
            history_limit,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Directory(DirectoryError::Unavailable) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub command: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct WebsiteRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

pub async fn handle_command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<CommandResult>, ApiError> {
    if req.command.trim().is_empty() {
        return Err(ApiError::BadRequest("command required".to_string()));
    }

    let result = state.interpreter.process(&req.command);
    let log = state.history.record(&req.command, &result);
    tracing::info!(
        id = log.id,
        action = %log.action,
        success = log.success,
        "voice command processed"
    );
    Ok(Json(result))
}

pub async fn handle_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<CommandLog>> {
    let limit = query.limit.unwrap_or(state.history_limit);
    Json(state.history.list(limit))
}

pub async fn handle_summary(State(state): State<Arc<AppState>>) -> Json<HistorySummary> {
    Json(state.history.summary())
}

pub async fn handle_websites(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.interpreter.list_supported_websites())
}

pub async fn handle_add_website(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WebsiteRequest>,
) -> Result<(StatusCode, Json<WebsiteRequest>), ApiError> {
    state.interpreter.add_website(&req.name, &req.url)?;
    let added = WebsiteRequest {
        name: req.name.trim().to_lowercase(),
        url: req.url.trim().to_string(),
    };
    tracing::info!(name = %added.name, url = %added.url, "website registered");
    Ok((StatusCode::CREATED, Json(added)))
}
