use super::ContentStore;
use crate::error::{MakerError, Result};
use crate::model::ContentItem;
use std::fs;
use std::path::PathBuf;

/// A catalog stored as a JSON array of items.
///
/// The file is read on every call, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<ContentItem>> {
        let content = fs::read_to_string(&self.path)?;
        let items: Vec<ContentItem> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), items = items.len(), "catalog loaded");
        Ok(items)
    }
}

impl ContentStore for FileCatalog {
    fn list_items(&self) -> Result<Vec<ContentItem>> {
        self.load()
    }

    fn get_item(&self, id: &str) -> Result<ContentItem> {
        self.load()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| MakerError::ContentNotFound(id.to_string()))
    }
}
