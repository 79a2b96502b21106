//! # Text Filtering
//!
//! Case-insensitive substring filtering over an in-memory list of
//! [`ContentItem`]s. There is no tokenizing, fuzzy matching or ranking:
//! results keep the order of the input slice.
//!
//! Matching uses the same case-insensitive literal matcher as
//! [`highlight`](crate::highlight::highlight), so characters that are special
//! in regular expressions (`.`, `*`, `(`...) only ever match themselves, and
//! every result has a visible match in the field that selected it.

use crate::highlight::literal_matcher;
use crate::model::{ContentItem, ContentKind, SearchField};
use regex::Regex;

/// Returns the items whose default searchable fields contain `query`.
///
/// A blank query returns every item, in order.
pub fn filter(items: &[ContentItem], query: &str) -> Vec<ContentItem> {
    filter_by(items, query, SearchField::defaults())
}

/// Like [`filter`], with the caller designating the searchable fields.
pub fn filter_by(items: &[ContentItem], query: &str, fields: &[SearchField]) -> Vec<ContentItem> {
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let Some(matcher) = literal_matcher(query) else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| matches_any(item, &matcher, fields))
        .cloned()
        .collect()
}

fn matches_any(item: &ContentItem, matcher: &Regex, fields: &[SearchField]) -> bool {
    fields.iter().any(|field| matcher.is_match(item.field(*field)))
}

/// Topic facet value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// A full grid query: optional facets followed by the text filter.
#[derive(Debug, Clone, Default)]
pub struct ContentQuery {
    pub text: String,
    pub category: Option<String>,
    pub kind: Option<ContentKind>,
    pub fields: Vec<SearchField>,
}

impl ContentQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_fields(mut self, fields: Vec<SearchField>) -> Self {
        self.fields = fields;
        self
    }

    fn effective_fields(&self) -> &[SearchField] {
        if self.fields.is_empty() {
            SearchField::defaults()
        } else {
            &self.fields
        }
    }

    /// Applies the category and kind facets (exact matches), then the text
    /// filter.
    pub fn apply(&self, items: &[ContentItem]) -> Vec<ContentItem> {
        let category = self
            .category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

        let faceted: Vec<ContentItem> = items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .filter(|item| self.kind.map_or(true, |k| item.kind == k))
            .cloned()
            .collect();

        filter_by(&faceted, &self.text, self.effective_fields())
    }
}
