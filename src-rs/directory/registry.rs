use std::collections::HashMap;
use std::sync::RwLock;

use super::defaults::{DEFAULT_ALIASES, DEFAULT_SITES};
use super::types::{Alias, DirectoryError, SiteEntry};

#[derive(Default)]
struct SiteTable {
    entries: Vec<SiteEntry>,
    index: HashMap<String, usize>,
}

impl SiteTable {
    fn upsert(&mut self, name: String, url: String) {
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].url = url,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(SiteEntry { name, url });
            }
        }
    }
}

/// Known websites keyed by lowercase name, kept in insertion order, plus the
/// alias table used as a resolution fallback.
///
/// Sites can be added at runtime but never removed. Re-adding a known name
/// replaces its URL without moving it.
pub struct WebsiteDirectory {
    sites: RwLock<SiteTable>,
    aliases: Vec<Alias>,
}

impl WebsiteDirectory {
    /// An empty directory with no aliases.
    pub fn new() -> Self {
        Self {
            sites: RwLock::new(SiteTable::default()),
            aliases: Vec::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::from_tables(DEFAULT_SITES, DEFAULT_ALIASES)
    }

    pub fn from_tables(sites: &[(&str, &str)], aliases: &[(&str, &str)]) -> Self {
        let mut table = SiteTable::default();
        for (name, url) in sites {
            table.upsert(name.to_lowercase(), url.to_string());
        }
        Self {
            sites: RwLock::new(table),
            aliases: aliases
                .iter()
                .map(|(token, key)| Alias {
                    token: token.to_string(),
                    key: key.to_string(),
                })
                .collect(),
        }
    }

    pub fn add_website(&self, name: &str, url: &str) -> Result<(), DirectoryError> {
        let name = name.trim().to_lowercase();
        let url = url.trim();
        if name.is_empty() {
            return Err(DirectoryError::EmptyName);
        }
        if url.is_empty() {
            return Err(DirectoryError::EmptyUrl);
        }
        let mut table = self.sites.write().map_err(|_| {
            tracing::warn!(name = %name, "website directory lock poisoned");
            DirectoryError::Unavailable
        })?;
        tracing::debug!(name = %name, url = %url, "website added");
        table.upsert(name, url.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<String> {
        let table = self.sites.read().ok()?;
        let pos = table.index.get(name)?;
        Some(table.entries[*pos].url.clone())
    }

    pub fn has(&self, name: &str) -> bool {
        match self.sites.read() {
            Ok(table) => table.index.contains_key(name),
            Err(_) => false,
        }
    }

    /// Snapshot of every entry in insertion order.
    pub fn entries(&self) -> Vec<SiteEntry> {
        match self.sites.read() {
            Ok(table) => table.entries.clone(),
            Err(_) => vec![],
        }
    }

    pub fn names(&self) -> Vec<String> {
        match self.sites.read() {
            Ok(table) => table.entries.iter().map(|entry| entry.name.clone()).collect(),
            Err(_) => vec![],
        }
    }

    pub fn count(&self) -> usize {
        match self.sites.read() {
            Ok(table) => table.entries.len(),
            Err(_) => 0,
        }
    }

    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }
}

impl Default for WebsiteDirectory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
