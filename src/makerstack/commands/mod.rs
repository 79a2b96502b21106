use crate::config::SiteConfig;
use crate::document::{Document, LayoutLine, TocEntry};
use crate::highlight::Segment;
use crate::model::{ContentItem, SubscriptionReceipt};
use crate::navigation::Section;
use crate::progress::ReadingProgress;

pub mod config;
pub mod list;
pub mod read;
pub mod search;
pub mod sections;
pub mod sign_in;
pub mod subscribe;
pub mod topics;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A search result with its title and description split for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub item: ContentItem,
    pub title: Vec<Segment>,
    pub description: Vec<Segment>,
}

/// Everything the detail view shows for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub item: ContentItem,
    pub document: Document,
    pub toc: Vec<TocEntry>,
}

/// The slice of a laid-out document visible at a scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingWindow {
    pub item: ContentItem,
    pub lines: Vec<LayoutLine>,
    pub offset: usize,
    pub total_lines: usize,
    pub progress: ReadingProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub section: Section,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<ContentItem>,
    pub hits: Vec<SearchHit>,
    pub detail: Option<DetailView>,
    pub reading: Option<ReadingWindow>,
    pub sections: Vec<SectionEntry>,
    pub topics: Vec<String>,
    pub receipt: Option<SubscriptionReceipt>,
    pub config: Option<SiteConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<ContentItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_hits(mut self, hits: Vec<SearchHit>) -> Self {
        self.hits = hits;
        self
    }

    pub fn with_detail(mut self, detail: DetailView) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_reading(mut self, window: ReadingWindow) -> Self {
        self.reading = Some(window);
        self
    }

    pub fn with_sections(mut self, sections: Vec<SectionEntry>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.topics = topics;
        self
    }

    pub fn with_receipt(mut self, receipt: SubscriptionReceipt) -> Self {
        self.receipt = Some(receipt);
        self
    }

    pub fn with_config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }
}
