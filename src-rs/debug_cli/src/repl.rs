use std::io;

use crate::client::HTTPClient;
use crate::models::{CLIConfig, VoiceResult};
use crate::render;

pub struct REPL {
    pub config: CLIConfig,
    pub client: HTTPClient,
}

impl REPL {
    pub fn new(config: CLIConfig, client: HTTPClient) -> Self {
        Self { config, client }
    }

    pub fn run(&mut self) {
        render::banner(&self.config);
        loop {
            render::prompt();
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('/') {
                if self.handle_command(&line) {
                    break;
                }
                continue;
            }
            self.send(&line);
        }
    }

    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").trim_start_matches('/');
        let rest = parts.next().unwrap_or("").trim();
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "debug" => {
                if rest.is_empty() {
                    self.config.debug = !self.config.debug;
                    render::info(&format!("debug: {}", self.config.debug));
                } else if let Some(flag) = parse_on_off(rest) {
                    self.config.debug = flag;
                    render::info(&format!("debug: {}", self.config.debug));
                } else {
                    render::error("invalid debug flag");
                }
            }
            "history" => {
                let limit = rest.parse::<usize>().unwrap_or(10);
                match self.client.history(limit) {
                    Ok(items) => render::history(&items),
                    Err(err) => render::error(&err),
                }
            }
            "summary" => match self.client.summary() {
                Ok(summary) => render::summary(&summary),
                Err(err) => render::error(&err),
            },
            "sites" => match self.client.websites() {
                Ok(names) => render::sites(&names),
                Err(err) => render::error(&err),
            },
            "add" => match parse_site(rest) {
                Some((name, url)) => match self.client.add_website(name, url) {
                    Ok(site) => render::info(&format!("added {} -> {}", site.name, site.url)),
                    Err(err) => render::error(&err),
                },
                None => render::error("usage: /add <name> <url>"),
            },
            "config" => render::config(&self.config),
            "base" => {
                if rest.is_empty() {
                    render::info(&format!("base: {}", self.config.base_url));
                } else {
                    self.config.base_url = rest.to_string();
                    self.client = HTTPClient::new(&self.config.base_url);
                    render::info("base url updated");
                }
            }
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    fn send(&mut self, line: &str) {
        let value = match self.client.send_command(line) {
            Ok(value) => value,
            Err(err) => {
                render::error(&err);
                return;
            }
        };
        if self.config.debug {
            render::raw(&value);
        }
        match serde_json::from_value::<VoiceResult>(value) {
            Ok(result) => render::result(&result),
            Err(err) => render::error(&err.to_string()),
        }
    }
}

fn parse_on_off(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Site names may contain spaces, so the URL is the last word.
fn parse_site(rest: &str) -> Option<(&str, &str)> {
    let (name, url) = rest.rsplit_once(' ')?;
    let name = name.trim();
    if name.is_empty() || url.is_empty() {
        return None;
    }
    Some((name, url))
}
