use crate::directory::WebsiteDirectory;
use crate::result::CommandResult;

/// A classifier's verdict on one normalized command.
///
/// `Claimed` ends the pipeline even when the result is a failure; only
/// `Declined` passes the command on to the next classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Claimed(CommandResult),
    Declined,
}

impl Classification {
    pub fn is_claimed(&self) -> bool {
        matches!(self, Classification::Claimed(_))
    }
}

pub trait Classifier: Send + Sync {
    fn name(&self) -> &'static str;

    /// `command` is already trimmed and lowercased.
    fn classify(&self, command: &str, directory: &WebsiteDirectory) -> Classification;
}
