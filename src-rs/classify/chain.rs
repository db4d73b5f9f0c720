use std::sync::Arc;

use super::complex::ComplexActionClassifier;
use super::directional::DirectionalVerbClassifier;
use super::information::InformationClassifier;
use super::mention::DirectMentionClassifier;
use super::types::{Classification, Classifier};
use crate::directory::WebsiteDirectory;
use crate::result::CommandResult;

pub const UNRECOGNIZED_MESSAGE: &str =
    "I couldn't understand that command. Try saying 'open [website]' or 'go to [website]'";

/// Ordered classifiers for a single command. The first claim wins.
pub struct ClassifierChain {
    classifiers: Vec<Arc<dyn Classifier>>,
}

impl ClassifierChain {
    pub fn new() -> Self {
        Self {
            classifiers: Vec::new(),
        }
    }

    /// Information, complex action, directional verb, direct mention.
    pub fn standard() -> Self {
        let mut chain = Self::new();
        chain.register(Arc::new(InformationClassifier));
        chain.register(Arc::new(ComplexActionClassifier));
        chain.register(Arc::new(DirectionalVerbClassifier));
        chain.register(Arc::new(DirectMentionClassifier));
        chain
    }

    pub fn register(&mut self, classifier: Arc<dyn Classifier>) {
        self.classifiers.push(classifier);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.classifiers.iter().map(|classifier| classifier.name()).collect()
    }

    pub fn run(&self, command: &str, directory: &WebsiteDirectory) -> CommandResult {
        for classifier in &self.classifiers {
            if let Classification::Claimed(result) = classifier.classify(command, directory) {
                tracing::debug!(
                    classifier = classifier.name(),
                    success = result.success,
                    "command claimed"
                );
                return result;
            }
        }
        tracing::debug!(command, "no classifier claimed command");
        CommandResult::failure(UNRECOGNIZED_MESSAGE)
    }
}

impl Default for ClassifierChain {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, Option<bool>);

    impl Classifier for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn classify(&self, _command: &str, _directory: &WebsiteDirectory) -> Classification {
            match self.1 {
                Some(true) => {
                    Classification::Claimed(CommandResult::open_website(self.0, "https://x.example"))
                }
                Some(false) => Classification::Claimed(CommandResult::failure(self.0)),
                None => Classification::Declined,
            }
        }
    }

    #[test]
    fn standard_order() {
        assert_eq!(
            ClassifierChain::standard().names(),
            vec!["information", "complex_action", "directional_verb", "direct_mention"]
        );
    }

    #[test]
    fn claimed_failure_stops_the_chain() {
        let mut chain = ClassifierChain::new();
        chain.register(Arc::new(Fixed("skip", None)));
        chain.register(Arc::new(Fixed("stop", Some(false))));
        chain.register(Arc::new(Fixed("never", Some(true))));
        let result = chain.run("anything", &WebsiteDirectory::new());
        assert!(!result.success);
        assert_eq!(result.message, "stop");
    }

    #[test]
    fn empty_chain_reports_unrecognized() {
        let result = ClassifierChain::new().run("anything", &WebsiteDirectory::new());
        assert!(!result.success);
        assert_eq!(result.message, UNRECOGNIZED_MESSAGE);
        assert!(result.action.is_none());
    }
}
