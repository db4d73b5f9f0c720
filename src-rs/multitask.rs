//! Numbered-list commands such as "1. open google 2. open youtube".
//!
//! Detection and splitting run on the raw command, before lowercasing. Any
//! digits followed by a period count as a list marker, so version numbers
//! and prices can trigger multitask mode too.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\.\s*[^0-9]+").expect("list item pattern"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberedItem {
    pub number: u32,
    pub command: String,
}

/// True when the command holds at least two list items.
pub fn is_multi_task(command: &str) -> bool {
    LIST_ITEM.find_iter(command).nth(1).is_some()
}

/// Splits a numbered list into items, keeping the numbers as written.
///
/// An item is `<digits>.` followed by a run of non-digit text that ends at
/// the end of input or right before the next `<digits>.` marker. A run that
/// ends at digits without a period is not an item. Blank items are kept with
/// an empty command.
pub fn parse_numbered_list(command: &str) -> Vec<NumberedItem> {
    let bytes = command.as_bytes();
    let mut items = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        match match_item(bytes, pos) {
            Some((digits_end, text_end)) => {
                let digits = &command[pos..digits_end];
                items.push(build_item(digits, &command[digits_end + 1..text_end]));
                pos = text_end;
            }
            None => pos += 1,
        }
    }
    items
}

/// Returns the end of the digit run and the end of the item text.
fn match_item(bytes: &[u8], start: usize) -> Option<(usize, usize)> {
    let digits_end = skip_digits(bytes, start);
    if digits_end == start || bytes.get(digits_end) != Some(&b'.') {
        return None;
    }
    let text_start = digits_end + 1;
    let text_end = text_start
        + bytes[text_start..]
            .iter()
            .take_while(|b| !b.is_ascii_digit())
            .count();
    if text_end == text_start {
        return None;
    }
    if text_end < bytes.len() {
        let next_digits_end = skip_digits(bytes, text_end);
        if bytes.get(next_digits_end) != Some(&b'.') {
            return None;
        }
    }
    Some((digits_end, text_end))
}

fn skip_digits(bytes: &[u8], start: usize) -> usize {
    start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn build_item(digits: &str, text: &str) -> NumberedItem {
    let line = text.trim_start();
    let line = line.split(['\n', '\r']).next().unwrap_or_default().trim();
    NumberedItem {
        number: digits.parse().unwrap_or(u32::MAX),
        command: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(number: u32, command: &str) -> NumberedItem {
        NumberedItem {
            number,
            command: command.to_string(),
        }
    }

    #[test]
    fn detection_needs_two_items() {
        assert!(is_multi_task("1. open google 2. open youtube"));
        assert!(is_multi_task("1.open google\n2.open youtube"));
        assert!(!is_multi_task("1. open google"));
        assert!(!is_multi_task("open google"));
        assert!(!is_multi_task("what is 3.5 times 2"));
    }

    #[test]
    fn parses_items_in_order() {
        assert_eq!(
            parse_numbered_list("1. Open Google 2. open youtube  3. what is rust?"),
            vec![item(1, "Open Google"), item(2, "open youtube"), item(3, "what is rust?")]
        );
    }

    #[test]
    fn keeps_literal_numbers() {
        assert_eq!(
            parse_numbered_list("3. open bbc 7. open cnn"),
            vec![item(3, "open bbc"), item(7, "open cnn")]
        );
    }

    #[test]
    fn item_ending_at_bare_digits_is_skipped() {
        // "play top " runs into "10" which is not a list marker
        assert_eq!(
            parse_numbered_list("1. play top 10 songs 2. open google"),
            vec![item(2, "open google")]
        );
    }

    #[test]
    fn text_stops_at_line_break() {
        assert_eq!(
            parse_numbered_list("1. open google\nplease\n2. open bing"),
            vec![item(1, "open google"), item(2, "open bing")]
        );
    }

    #[test]
    fn blank_items_are_kept_empty() {
        assert!(is_multi_task("1. 2. 3."));
        // "3." has no text at all, so only two items
        assert_eq!(parse_numbered_list("1. 2. 3."), vec![item(1, ""), item(2, "")]);
        assert_eq!(
            parse_numbered_list("1. open google 2. 3. open bing"),
            vec![item(1, "open google"), item(2, ""), item(3, "open bing")]
        );
    }

    #[test]
    fn list_markers_without_items() {
        assert!(is_multi_task("1. a 2 b 3. c 4 d"));
        assert!(parse_numbered_list("1. a 2 b 3. c 4 d").is_empty());
    }
}
