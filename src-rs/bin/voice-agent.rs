use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use voice_agent_rs::api::{AppState, VoiceAgentServer};
use voice_agent_rs::{build_interpreter, AgentConfig};

#[tokio::main]
async fn main() {
    let cfg = AgentConfig::from_env();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let interpreter = build_interpreter(&cfg);
    tracing::info!(
        port = cfg.port,
        websites = interpreter.directory().count(),
        "starting voice agent"
    );

    let state = Arc::new(AppState::new(interpreter, cfg.history_limit));
    let server = VoiceAgentServer::new(cfg.port, state);
    if let Err(err) = server.start().await {
        tracing::error!(error = %err, "voice agent stopped");
        std::process::exit(1);
    }
}
