use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Classification, Classifier};
use crate::directory::WebsiteDirectory;
use crate::result::{ActionStep, CommandResult};

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("complex action pattern")
}

static YOUTUBE_PLAY: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?:open\s+youtube\s+and\s+play|play\s+on\s+youtube|youtube\s+play)\s+(.+)")
});
static YOUTUBE_SEARCH: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?:search\s+youtube\s+for|youtube\s+search)\s+(.+)"));
static SPOTIFY_PLAY: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?:open\s+spotify\s+and\s+play|play\s+on\s+spotify|spotify\s+play)\s+(.+)")
});
static GOOGLE_SEARCH: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?:google\s+search\s+for|search\s+google\s+for|google\s+for)\s+(.+)"));
static AMAZON_SEARCH: Lazy<Regex> = Lazy::new(|| {
    pattern(r"(?:amazon\s+search\s+for|search\s+amazon\s+for|find\s+on\s+amazon|buy\s+on\s+amazon)\s+(.+)")
});

const PAGE_LOAD: &str = "Waiting for page to load";
const SEARCH_RESULTS: &str = "Waiting for search results";
const SEARCH_BUTTON: &str = "Clicking search button";

/// Platforms with multi-step plans, in the order they are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    YouTube,
    Spotify,
    Google,
    Amazon,
    Gmail,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::YouTube,
        Platform::Spotify,
        Platform::Google,
        Platform::Amazon,
        Platform::Gmail,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Spotify => "spotify",
            Platform::Google => "google",
            Platform::Amazon => "amazon",
            Platform::Gmail => "gmail",
        }
    }

    pub fn verbs(&self) -> &'static [&'static str] {
        match self {
            Platform::YouTube | Platform::Spotify => &["play", "search"],
            Platform::Google => &["search", "for"],
            Platform::Amazon => &["search", "buy", "find"],
            Platform::Gmail => &["send", "compose", "email"],
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Platform::YouTube => "https://www.youtube.com",
            Platform::Spotify => "https://open.spotify.com",
            Platform::Google => "https://www.google.com",
            Platform::Amazon => "https://www.amazon.com",
            Platform::Gmail => "https://mail.google.com",
        }
    }

    pub fn matches(&self, command: &str) -> bool {
        command.contains(self.keyword()) && self.verbs().iter().any(|verb| command.contains(verb))
    }

    /// Builds the plan, or a failure asking for the missing query.
    pub fn plan(&self, command: &str) -> CommandResult {
        let query = match self {
            Platform::Gmail => String::new(),
            _ => match self.extract_query(command) {
                Some(query) => query,
                None => return CommandResult::failure(self.missing_query_message()),
            },
        };

        let (message, steps) = match self {
            Platform::YouTube => (
                format!("Opening YouTube and playing \"{}\"", query),
                vec![
                    ActionStep::navigate(self.url(), "Opening YouTube"),
                    ActionStep::wait(2000, PAGE_LOAD),
                    ActionStep::search(r#"input[name="search_query"]"#, &query),
                    ActionStep::click(r#"button[id="search-icon-legacy"]"#, SEARCH_BUTTON),
                    ActionStep::wait(3000, SEARCH_RESULTS),
                    ActionStep::click(r#"a[id="video-title"]"#, "Playing first video result"),
                ],
            ),
            Platform::Spotify => (
                format!("Opening Spotify and playing \"{}\"", query),
                vec![
                    ActionStep::navigate(self.url(), "Opening Spotify Web Player"),
                    ActionStep::wait(3000, PAGE_LOAD),
                    ActionStep::search(r#"input[data-testid="search-input"]"#, &query),
                    ActionStep::wait(2000, SEARCH_RESULTS),
                    ActionStep::click(r#"button[data-testid="play-button"]"#, "Playing first result"),
                ],
            ),
            Platform::Google => (
                format!("Searching Google for \"{}\"", query),
                vec![
                    ActionStep::navigate(self.url(), "Opening Google"),
                    ActionStep::wait(2000, PAGE_LOAD),
                    ActionStep::search(r#"input[name="q"]"#, &query),
                    ActionStep::click(r#"input[name="btnK"]"#, SEARCH_BUTTON),
                ],
            ),
            Platform::Amazon => (
                format!("Searching Amazon for \"{}\"", query),
                vec![
                    ActionStep::navigate(self.url(), "Opening Amazon"),
                    ActionStep::wait(2000, PAGE_LOAD),
                    ActionStep::search(r#"input[id="twotabsearchtextbox"]"#, &query),
                    ActionStep::click(r#"input[id="nav-search-submit-button"]"#, SEARCH_BUTTON),
                ],
            ),
            Platform::Gmail => (
                "Opening Gmail and starting to compose an email".to_string(),
                vec![
                    ActionStep::navigate(self.url(), "Opening Gmail"),
                    ActionStep::wait(3000, "Waiting for Gmail to load"),
                    ActionStep::click(r#"div[role="button"][gh="cm"]"#, "Clicking compose button"),
                ],
            ),
        };
        CommandResult::complex_action(message, self.url(), steps)
    }

    fn extract_query(&self, command: &str) -> Option<String> {
        let patterns: Vec<&Regex> = match self {
            Platform::YouTube => vec![&*YOUTUBE_PLAY, &*YOUTUBE_SEARCH],
            Platform::Spotify => vec![&*SPOTIFY_PLAY],
            Platform::Google => vec![&*GOOGLE_SEARCH],
            Platform::Amazon => vec![&*AMAZON_SEARCH],
            Platform::Gmail => vec![],
        };
        // a later pattern overrides an earlier one when both capture
        patterns
            .into_iter()
            .filter_map(|re| capture_query(re, command))
            .last()
    }

    fn missing_query_message(&self) -> &'static str {
        match self {
            Platform::YouTube => "Please specify what to play on YouTube",
            Platform::Spotify => "Please specify what to play on Spotify",
            Platform::Google => "Please specify what to search for on Google",
            Platform::Amazon => "Please specify what to search for on Amazon",
            Platform::Gmail => "Please specify what to do in Gmail",
        }
    }
}

fn capture_query(re: &Regex, command: &str) -> Option<String> {
    let query = re.captures(command)?.get(1)?.as_str().trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

pub struct ComplexActionClassifier;

impl Classifier for ComplexActionClassifier {
    fn name(&self) -> &'static str {
        "complex_action"
    }

    fn classify(&self, command: &str, _directory: &WebsiteDirectory) -> Classification {
        match Platform::ALL.iter().find(|platform| platform.matches(command)) {
            Some(platform) => Classification::Claimed(platform.plan(command)),
            None => Classification::Declined,
        }
    }
}
