use crate::config::AgentConfig;
use crate::directory::WebsiteDirectory;
use crate::interpreter::CommandInterpreter;

/// Parses `name=url` pairs separated by commas. Pairs missing either side
/// are skipped.
pub fn parse_site_pairs(raw: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for item in raw.split(',') {
        let Some((name, url)) = item.split_once('=') else {
            continue;
        };
        let name = name.trim();
        let url = url.trim();
        if !name.is_empty() && !url.is_empty() {
            pairs.push((name.to_string(), url.to_string()));
        }
    }
    pairs
}

/// Default directory plus the configured extra websites.
pub fn build_interpreter(cfg: &AgentConfig) -> CommandInterpreter {
    let interpreter = CommandInterpreter::new(WebsiteDirectory::with_defaults());
    for (name, url) in &cfg.extra_websites {
        if let Err(err) = interpreter.add_website(name, url) {
            tracing::warn!(name = %name, error = %err, "skipping configured website");
        }
    }
    interpreter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_skips_malformed() {
        let pairs = parse_site_pairs(" foo = https://foo.example ,broken, =https://x.example,bar=,baz=https://baz.example");
        assert_eq!(
            pairs,
            vec![
                ("foo".to_string(), "https://foo.example".to_string()),
                ("baz".to_string(), "https://baz.example".to_string()),
            ]
        );
        assert!(parse_site_pairs("").is_empty());
    }

    #[test]
    fn interpreter_includes_extra_websites() {
        let cfg = AgentConfig {
            extra_websites: vec![("Intranet".to_string(), "https://intranet.example".to_string())],
            ..AgentConfig::default()
        };
        let interpreter = build_interpreter(&cfg);
        assert_eq!(
            interpreter.list_supported_websites().last().map(String::as_str),
            Some("intranet")
        );
        assert_eq!(
            interpreter.process("go to intranet").url.as_deref(),
            Some("https://intranet.example")
        );
    }
}
