pub use crate::config::AgentConfig;
pub use crate::history::{CommandHistory, CommandLog, HistorySummary};
pub use crate::interpreter::CommandInterpreter;
pub use crate::result::CommandResult;

pub mod handlers;
pub mod server;

pub use handlers::{ApiError, AppState};
pub use server::{build_router, ServerError, VoiceAgentServer};
