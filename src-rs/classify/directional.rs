use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Classification, Classifier};
use crate::directory::{resolve_website, WebsiteDirectory};
use crate::result::CommandResult;

struct DirectionalVerb {
    phrase: &'static str,
    capture: Lazy<Regex>,
    prompt: &'static str,
}

static VERBS: [DirectionalVerb; 4] = [
    DirectionalVerb {
        phrase: "open",
        capture: Lazy::new(|| Regex::new(r"open\s+(.+)").expect("open pattern")),
        prompt: "Please specify which website to open",
    },
    DirectionalVerb {
        phrase: "go to",
        capture: Lazy::new(|| Regex::new(r"go\s+to\s+(.+)").expect("go to pattern")),
        prompt: "Please specify which website to go to",
    },
    DirectionalVerb {
        phrase: "navigate to",
        capture: Lazy::new(|| Regex::new(r"navigate\s+to\s+(.+)").expect("navigate pattern")),
        prompt: "Please specify which website to navigate to",
    },
    DirectionalVerb {
        phrase: "visit",
        capture: Lazy::new(|| Regex::new(r"visit\s+(.+)").expect("visit pattern")),
        prompt: "Please specify which website to visit",
    },
];

/// "open X", "go to X", "navigate to X", "visit X".
///
/// Verbs are checked in that order anywhere in the command, so "open"
/// wins even when another verb comes first in the sentence. A verb with
/// nothing after it is a claimed failure.
pub struct DirectionalVerbClassifier;

impl Classifier for DirectionalVerbClassifier {
    fn name(&self) -> &'static str {
        "directional_verb"
    }

    fn classify(&self, command: &str, directory: &WebsiteDirectory) -> Classification {
        let Some(verb) = VERBS.iter().find(|verb| command.contains(verb.phrase)) else {
            return Classification::Declined;
        };
        let target = verb
            .capture
            .captures(command)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim());
        match target {
            Some(target) => {
                tracing::debug!(verb = verb.phrase, target, "directional target");
                Classification::Claimed(resolve_website(directory, target))
            }
            None => Classification::Claimed(CommandResult::failure(verb.prompt)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ActionKind;

    fn claimed(command: &str) -> CommandResult {
        match DirectionalVerbClassifier.classify(command, &WebsiteDirectory::with_defaults()) {
            Classification::Claimed(result) => result,
            Classification::Declined => panic!("expected {command:?} to be claimed"),
        }
    }

    #[test]
    fn resolves_each_verb() {
        for (command, url) in [
            ("open github", "https://www.github.com"),
            ("go to reddit", "https://www.reddit.com"),
            ("navigate to the bbc website", "https://www.bbc.com"),
            ("visit netflix.com", "https://www.netflix.com"),
        ] {
            let result = claimed(command);
            assert!(result.success, "{command}");
            assert_eq!(result.action, Some(ActionKind::OpenWebsite));
            assert_eq!(result.url.as_deref(), Some(url), "{command}");
        }
    }

    #[test]
    fn open_takes_priority_over_position() {
        let result = claimed("go to twitter and open reddit");
        assert_eq!(result.url.as_deref(), Some("https://www.reddit.com"));
    }

    #[test]
    fn verb_without_target_prompts() {
        assert_eq!(claimed("open").message, "Please specify which website to open");
        assert_eq!(claimed("please visit").message, "Please specify which website to visit");
        assert!(!claimed("go to").success);
    }

    #[test]
    fn declines_without_verb() {
        let decision = DirectionalVerbClassifier.classify("reddit please", &WebsiteDirectory::with_defaults());
        assert_eq!(decision, Classification::Declined);
    }
}
