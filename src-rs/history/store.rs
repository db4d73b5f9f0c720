use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use super::types::{CommandLog, HistorySummary};
use crate::result::CommandResult;

/// In-memory log of processed commands. Lives as long as the process.
pub struct CommandHistory {
    next_id: AtomicU64,
    logs: RwLock<Vec<CommandLog>>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            logs: RwLock::new(Vec::new()),
        }
    }

    /// Stores the command with its action label, its URL (or the command
    /// itself when there is none) and its success flag.
    pub fn record(&self, command: &str, result: &CommandResult) -> CommandLog {
        let log = CommandLog {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            command: command.to_string(),
            action: result.action_label().to_string(),
            target: result.url.clone().unwrap_or_else(|| command.to_string()),
            success: result.success,
            executed_at: Utc::now(),
        };
        if let Ok(mut logs) = self.logs.write() {
            logs.push(log.clone());
        }
        log
    }

    /// Newest first.
    pub fn list(&self, limit: usize) -> Vec<CommandLog> {
        let logs = match self.logs.read() {
            Ok(lock) => lock,
            Err(_) => return vec![],
        };
        let mut items: Vec<CommandLog> = logs.clone();
        items.sort_by(|a, b| b.executed_at.cmp(&a.executed_at).then(b.id.cmp(&a.id)));
        items.truncate(limit);
        items
    }

    pub fn get(&self, id: u64) -> Option<CommandLog> {
        let logs = self.logs.read().ok()?;
        logs.iter().find(|log| log.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.logs.read().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> HistorySummary {
        let logs = match self.logs.read() {
            Ok(lock) => lock,
            Err(_) => return HistorySummary::default(),
        };
        let successful = logs.iter().filter(|log| log.success).count();
        HistorySummary {
            total: logs.len(),
            successful,
            failed: logs.len() - successful,
        }
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}
