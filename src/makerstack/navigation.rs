//! # Navigation
//!
//! One configurable navigation component replaces the per-page variants:
//! [`SiteOptions`] says which affordances (search box, sign-in dialog) are
//! shown and how cards are laid out, and [`Navigator`] holds the in-process
//! view state (card grid or a single item's detail view).
//!
//! Navigation is by content id, not by route. Opening an id the catalog does
//! not know leaves the grid in place and yields a notice instead of an error.

use crate::model::{ContentItem, ContentKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Grid => f.write_str("grid"),
            Layout::List => f.write_str("list"),
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(Layout::Grid),
            "list" => Ok(Layout::List),
            other => Err(format!("Unknown layout: {} (expected grid or list)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOptions {
    pub brand: String,
    pub show_search: bool,
    pub show_auth_dialog: bool,
    pub layout: Layout,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            brand: "MakerStack".to_string(),
            show_search: true,
            show_auth_dialog: false,
            layout: Layout::Grid,
        }
    }
}

/// Top-level menu entries. Each maps onto one content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Featured,
    Articles,
    Playbooks,
    Tools,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Featured,
            Section::Articles,
            Section::Playbooks,
            Section::Tools,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Featured => "Featured",
            Section::Articles => "Articles",
            Section::Playbooks => "Playbooks",
            Section::Tools => "Tools",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Section::Featured => "Curated resources and insights for ambitious makers",
            Section::Articles => "Most recent insights and tutorials",
            Section::Playbooks => "Comprehensive guides and frameworks for makers",
            Section::Tools => "Streamline your building process with powerful utilities",
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Section::Featured => ContentKind::Featured,
            Section::Articles => ContentKind::Article,
            Section::Playbooks => ContentKind::Playbook,
            Section::Tools => ContentKind::Tool,
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Section::all()
            .iter()
            .copied()
            .find(|section| {
                let label = section.label().to_ascii_lowercase();
                label == wanted || label.trim_end_matches('s') == wanted
            })
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Grid,
    Detail(String),
}

/// What happened when a card was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened(ContentItem),
    /// The id is not in the catalog; the grid stays visible.
    ComingSoon { id: String },
}

pub const COMING_SOON_NOTICE: &str =
    "Content coming soon: this content is being prepared and will be available soon.";

#[derive(Debug, Default)]
pub struct Navigator {
    options: SiteOptions,
    view: View,
}

impl Navigator {
    pub fn new(options: SiteOptions) -> Self {
        Self {
            options,
            view: View::Grid,
        }
    }

    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn open(&mut self, id: &str, catalog: &[ContentItem]) -> OpenOutcome {
        match catalog.iter().find(|item| item.id == id) {
            Some(item) => {
                tracing::debug!(id, "opening detail view");
                self.view = View::Detail(item.id.clone());
                OpenOutcome::Opened(item.clone())
            }
            None => {
                tracing::debug!(id, "no content for id");
                OpenOutcome::ComingSoon { id: id.to_string() }
            }
        }
    }

    /// Returns to the grid. Returns false if the grid was already showing.
    pub fn back(&mut self) -> bool {
        let was_detail = matches!(self.view, View::Detail(_));
        self.view = View::Grid;
        was_detail
    }
}
