use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One processed command as stored in the history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandLog {
    pub id: u64,
    pub command: String,
    pub action: String,
    pub target: String,
    pub success: bool,
    pub executed_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}
