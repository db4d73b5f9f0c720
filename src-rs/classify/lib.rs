pub mod chain;
pub mod complex;
pub mod directional;
pub mod information;
pub mod mention;
pub mod types;

pub use chain::{ClassifierChain, UNRECOGNIZED_MESSAGE};
pub use complex::{ComplexActionClassifier, Platform};
pub use directional::DirectionalVerbClassifier;
pub use information::{extract_topic, InformationClassifier};
pub use mention::DirectMentionClassifier;
pub use types::{Classification, Classifier};
