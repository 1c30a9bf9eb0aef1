//! Read-only favicon cache lookups.

use std::collections::HashMap;

use url::Url;

use crate::managers::link_manager::normalize_url;
use crate::storage::blob_store::{BlobStore, FAVICON_CACHE_BLOB};
use crate::types::link::Link;

/// Hostname → icon URL map written by the icon fetch layer.
///
/// The core only consults it to backfill links that carry no icon of their
/// own; it never writes the blob back.
pub struct IconCache {
    entries: HashMap<String, String>,
}

impl IconCache {
    /// Loads the cache, treating a missing or unreadable blob as empty.
    pub fn load(store: &BlobStore) -> Self {
        Self {
            entries: store.read(FAVICON_CACHE_BLOB).unwrap_or_default(),
        }
    }

    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached icon for the link url's hostname, if any.
    pub fn lookup(&self, link_url: &str) -> Option<&str> {
        let parsed = Url::parse(&normalize_url(link_url)).ok()?;
        let host = parsed.host_str()?;
        self.entries.get(host).map(String::as_str)
    }

    /// Fills in missing icons from the cache. Returns how many links
    /// changed. In-memory only; the caller does not persist the result.
    pub fn backfill<'a, I>(&self, links: I) -> usize
    where
        I: IntoIterator<Item = &'a mut Link>,
    {
        if self.entries.is_empty() {
            return 0;
        }
        let mut filled = 0;
        for link in links {
            if link.icon.is_some() || link.url.is_empty() {
                continue;
            }
            if let Some(icon) = self.lookup(&link.url) {
                link.icon = Some(icon.to_string());
                filled += 1;
            }
        }
        filled
    }
}
