use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Tool,
    Playbook,
    Featured,
}

impl ContentKind {
    pub fn all() -> &'static [ContentKind] {
        &[
            ContentKind::Featured,
            ContentKind::Article,
            ContentKind::Playbook,
            ContentKind::Tool,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Article => "Article",
            ContentKind::Tool => "Tool",
            ContentKind::Playbook => "Playbook",
            ContentKind::Featured => "Featured",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "article" => Ok(ContentKind::Article),
            "tool" => Ok(ContentKind::Tool),
            "playbook" => Ok(ContentKind::Playbook),
            "featured" => Ok(ContentKind::Featured),
            other => Err(format!("Unknown content kind: {}", other)),
        }
    }
}

/// A piece of site content. Records are fixtures: nothing in the crate
/// creates, mutates or deletes them after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_body: Option<String>,
    #[serde(default)]
    pub author: String,
    /// Display-formatted ("Dec 12, 2024"), never parsed.
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub estimated_read_time: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub kind: ContentKind,
}

impl ContentItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            short_description: String::new(),
            full_body: None,
            author: String::new(),
            published_date: String::new(),
            estimated_read_time: String::new(),
            category: String::new(),
            image_url: None,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = description.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.full_body = Some(body.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_published(mut self, date: impl Into<String>, read_time: impl Into<String>) -> Self {
        self.published_date = date.into();
        self.estimated_read_time = read_time.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Value of a searchable field. Missing bodies read as empty.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::ShortDescription => &self.short_description,
            SearchField::Category => &self.category,
            SearchField::Author => &self.author,
            SearchField::Body => self.full_body.as_deref().unwrap_or_default(),
        }
    }
}

/// A record attribute eligible for substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    ShortDescription,
    Category,
    Author,
    Body,
}

impl SearchField {
    /// Fields the card grid searches when the caller designates none.
    pub fn defaults() -> &'static [SearchField] {
        &[
            SearchField::Title,
            SearchField::ShortDescription,
            SearchField::Category,
        ]
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "title" => Ok(SearchField::Title),
            "short_description" | "description" | "excerpt" => Ok(SearchField::ShortDescription),
            "category" | "topic" => Ok(SearchField::Category),
            "author" => Ok(SearchField::Author),
            "body" | "content" => Ok(SearchField::Body),
            other => Err(format!("Unknown search field: {}", other)),
        }
    }
}

/// Search box state, owned by the view that shows the results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub last_computed_results: Vec<ContentItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Transient state of the newsletter form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionAttempt {
    pub email: String,
    pub status: SubscriptionStatus,
    pub error_message: Option<String>,
}

impl SubscriptionAttempt {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// The submit control is disabled while a request is in flight.
    pub fn is_submit_enabled(&self) -> bool {
        self.status != SubscriptionStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionReceipt {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

impl SubscriptionReceipt {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            subscribed_at: Utc::now(),
        }
    }
}
