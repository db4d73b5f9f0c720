pub mod config;
pub mod helpers;
pub mod interpreter;
pub mod multitask;
pub mod result;

#[path = "directory/lib.rs"]
pub mod directory;
#[path = "classify/lib.rs"]
pub mod classify;
#[path = "history/lib.rs"]
pub mod history;
#[path = "api/lib.rs"]
pub mod api;

pub use config::AgentConfig;
pub use directory::WebsiteDirectory;
pub use helpers::build_interpreter;
pub use interpreter::CommandInterpreter;
pub use result::{ActionKind, ActionStep, CommandResult, StepKind, TaskOutcome, TaskStatus};
