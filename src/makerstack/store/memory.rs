use super::ContentStore;
use crate::error::{MakerError, Result};
use crate::model::ContentItem;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<ContentItem>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ContentStore for InMemoryCatalog {
    fn list_items(&self) -> Result<Vec<ContentItem>> {
        Ok(self.items.clone())
    }

    fn get_item(&self, id: &str) -> Result<ContentItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| MakerError::ContentNotFound(id.to_string()))
    }
}
