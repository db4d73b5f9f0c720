use super::types::{Classification, Classifier};
use crate::directory::WebsiteDirectory;
use crate::result::CommandResult;

/// Last resort: the first directory key that appears anywhere in the command.
pub struct DirectMentionClassifier;

impl Classifier for DirectMentionClassifier {
    fn name(&self) -> &'static str {
        "direct_mention"
    }

    fn classify(&self, command: &str, directory: &WebsiteDirectory) -> Classification {
        directory
            .entries()
            .into_iter()
            .find(|entry| command.contains(entry.name.as_str()))
            .map(|entry| {
                Classification::Claimed(CommandResult::open_website(
                    format!("Opening {}", entry.name),
                    &entry.url,
                ))
            })
            .unwrap_or(Classification::Declined)
    }
}
