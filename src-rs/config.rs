use std::env;

use crate::helpers::parse_site_pairs;

#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub port: u16,
    pub log_filter: String,
    pub history_limit: usize,
    pub extra_websites: Vec<(String, String)>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            log_filter: "voice_agent_rs=info".to_string(),
            history_limit: 50,
            extra_websites: Vec::new(),
        }
    }
}

impl AgentConfig {
    /// Defaults overridden by `PORT`, `VOICE_AGENT_LOG`,
    /// `VOICE_AGENT_HISTORY_LIMIT` and `VOICE_AGENT_SITES`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(port) = env::var("PORT").ok().and_then(|raw| raw.trim().parse::<u16>().ok()) {
            cfg.port = port;
        }
        if let Ok(filter) = env::var("VOICE_AGENT_LOG") {
            if !filter.trim().is_empty() {
                cfg.log_filter = filter.trim().to_string();
            }
        }
        if let Some(limit) = env::var("VOICE_AGENT_HISTORY_LIMIT")
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
        {
            cfg.history_limit = limit;
        }
        if let Ok(raw) = env::var("VOICE_AGENT_SITES") {
            cfg.extra_websites = parse_site_pairs(&raw);
        }
        cfg
    }
}
