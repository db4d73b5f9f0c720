use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{CommandRequest, LogEntry, Summary, Website};

pub struct HTTPClient {
    pub base_url: String,
    client: Client,
}

impl HTTPClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client"),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Raw JSON so the REPL can print it in debug mode.
    pub fn send_command(&self, command: &str) -> Result<Value, String> {
        let req = CommandRequest {
            command: command.to_string(),
        };
        let resp = self
            .client
            .post(self.url("/api/voice-commands"))
            .json(&req)
            .send()
            .map_err(|err| err.to_string())?;
        read_json(resp)
    }

    pub fn history(&self, limit: usize) -> Result<Vec<LogEntry>, String> {
        let resp = self
            .client
            .get(self.url(&format!("/api/voice-commands?limit={}", limit)))
            .send()
            .map_err(|err| err.to_string())?;
        read_json(resp)
    }

    pub fn summary(&self) -> Result<Summary, String> {
        let resp = self
            .client
            .get(self.url("/api/voice-commands/summary"))
            .send()
            .map_err(|err| err.to_string())?;
        read_json(resp)
    }

    pub fn websites(&self) -> Result<Vec<String>, String> {
        let resp = self
            .client
            .get(self.url("/api/supported-websites"))
            .send()
            .map_err(|err| err.to_string())?;
        read_json(resp)
    }

    pub fn add_website(&self, name: &str, url: &str) -> Result<Website, String> {
        let req = Website {
            name: name.to_string(),
            url: url.to_string(),
        };
        let resp = self
            .client
            .post(self.url("/api/supported-websites"))
            .json(&req)
            .send()
            .map_err(|err| err.to_string())?;
        read_json(resp)
    }
}

fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    if resp.status().is_success() {
        resp.json::<T>().map_err(|err| err.to_string())
    } else {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        Err(format!("http {}: {}", status.as_u16(), body))
    }
}
