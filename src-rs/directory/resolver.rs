use once_cell::sync::Lazy;
use regex::Regex;

use super::registry::WebsiteDirectory;
use super::types::SiteEntry;
use crate::result::CommandResult;

static FILLER_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(the|open|go|to)\b").expect("filler word pattern"));

const DOMAIN_SUFFIXES: &[&str] = &[".com", ".org", ".net", ".io"];

/// Strips domain suffixes, a trailing "website"/"site" and filler words
/// from a spoken site name.
pub fn clean_site_phrase(phrase: &str) -> String {
    let mut cleaned = phrase.trim().to_lowercase();
    for suffix in DOMAIN_SUFFIXES {
        strip_suffix_in_place(&mut cleaned, suffix);
    }
    strip_suffix_in_place(&mut cleaned, "website");
    strip_suffix_in_place(&mut cleaned, "site");
    FILLER_WORDS.replace_all(&cleaned, "").trim().to_string()
}

fn strip_suffix_in_place(value: &mut String, suffix: &str) {
    if value.ends_with(suffix) {
        value.truncate(value.len() - suffix.len());
    }
}

/// Maps a free-text site name to a URL.
///
/// Tries an exact key, then aliases, then two-way substring matching on the
/// whole phrase and on each word longer than two characters. Anything left
/// over becomes a guessed `https://www.<name>.com`, so only a phrase that
/// cleans down to nothing fails.
pub fn resolve_website(directory: &WebsiteDirectory, phrase: &str) -> CommandResult {
    let cleaned = clean_site_phrase(phrase);
    if cleaned.is_empty() {
        return CommandResult::failure(format!(
            "I couldn't find a website for \"{}\". Try being more specific or say \"open [website name]\".",
            phrase
        ));
    }

    if let Some(url) = directory.get(&cleaned) {
        tracing::debug!(phrase = %cleaned, "resolved by exact name");
        return CommandResult::open_website(format!("Opening {}", cleaned), &url);
    }

    for alias in directory.aliases() {
        if cleaned.contains(&alias.token) || alias.token.contains(&cleaned) {
            if let Some(url) = directory.get(&alias.key) {
                tracing::debug!(phrase = %cleaned, alias = %alias.token, "resolved by alias");
                return CommandResult::open_website(format!("Opening {}", alias.key), &url);
            }
        }
    }

    let entries = directory.entries();
    if let Some(entry) = find_overlapping(&entries, &cleaned) {
        tracing::debug!(phrase = %cleaned, key = %entry.name, "resolved by fuzzy match");
        return CommandResult::open_website(format!("Opening {}", entry.name), &entry.url);
    }

    for word in cleaned.split(' ').filter(|word| word.chars().count() > 2) {
        if let Some(entry) = find_overlapping(&entries, word) {
            tracing::debug!(phrase = %cleaned, word, key = %entry.name, "resolved by word match");
            return CommandResult::open_website(format!("Opening {}", entry.name), &entry.url);
        }
    }

    let guessed: String = cleaned.split_whitespace().collect();
    let url = format!("https://www.{}.com", guessed);
    tracing::debug!(phrase = %cleaned, url = %url, "guessed url");
    CommandResult::open_website(format!("Opening {}", cleaned), &url)
}

fn find_overlapping<'a>(entries: &'a [SiteEntry], needle: &str) -> Option<&'a SiteEntry> {
    entries
        .iter()
        .find(|entry| entry.name.contains(needle) || needle.contains(entry.name.as_str()))
}
