//! # Content Storage
//!
//! The site's content is a read-only catalog of [`ContentItem`]s addressed by
//! id. [`ContentStore`] abstracts where the catalog comes from so commands and
//! tests never depend on the filesystem.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryCatalog`]: a catalog held in memory. The built-in sample
//!   catalog ([`catalog::sample_catalog`]) is served this way by default.
//! - [`fs::FileCatalog`]: a JSON array of items on disk, loaded on each call.
//!
//! [`SiteCatalog`] picks one of the two at startup.
//!
//! Order is significant: listings and search results keep catalog order.

use crate::error::Result;
use crate::model::ContentItem;
use std::path::PathBuf;

pub mod catalog;
pub mod fs;
pub mod memory;

pub trait ContentStore {
    /// All items, in catalog order.
    fn list_items(&self) -> Result<Vec<ContentItem>>;

    /// Fails with `ContentNotFound` for unknown ids.
    fn get_item(&self, id: &str) -> Result<ContentItem>;
}

/// The catalog a client runs against: the built-in sample or a file.
#[derive(Debug, Clone)]
pub enum SiteCatalog {
    BuiltIn(memory::InMemoryCatalog),
    File(fs::FileCatalog),
}

impl SiteCatalog {
    pub fn open(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => SiteCatalog::File(fs::FileCatalog::new(path)),
            None => SiteCatalog::BuiltIn(memory::InMemoryCatalog::new(catalog::sample_catalog())),
        }
    }
}

impl ContentStore for SiteCatalog {
    fn list_items(&self) -> Result<Vec<ContentItem>> {
        match self {
            SiteCatalog::BuiltIn(store) => store.list_items(),
            SiteCatalog::File(store) => store.list_items(),
        }
    }

    fn get_item(&self, id: &str) -> Result<ContentItem> {
        match self {
            SiteCatalog::BuiltIn(store) => store.get_item(id),
            SiteCatalog::File(store) => store.get_item(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_built_in() {
        let store = SiteCatalog::open(None);
        assert!(matches!(store, SiteCatalog::BuiltIn(_)));
        assert_eq!(store.list_items().unwrap().len(), 8);
        assert_eq!(store.get_item("5").unwrap().title, "No-Code MVP Builder");
    }

    #[test]
    fn test_path_selects_file_catalog() {
        let store = SiteCatalog::open(Some(PathBuf::from("/nonexistent/catalog.json")));
        assert!(matches!(store, SiteCatalog::File(_)));
        assert!(store.list_items().is_err());
    }
}
