use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub name: String,
    pub url: String,
}

/// Shorthand token pointing at a directory key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alias {
    pub token: String,
    pub key: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("website name required")]
    EmptyName,
    #[error("website url required")]
    EmptyUrl,
    #[error("website directory unavailable")]
    Unavailable,
}
