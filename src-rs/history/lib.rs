pub mod store;
pub mod types;

pub use store::CommandHistory;
pub use types::{CommandLog, HistorySummary};
