pub mod defaults;
pub mod registry;
pub mod resolver;
pub mod types;

pub use registry::WebsiteDirectory;
pub use resolver::{clean_site_phrase, resolve_website};
pub use types::{Alias, DirectoryError, SiteEntry};
