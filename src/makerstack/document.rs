//! # Article Documents
//!
//! Content bodies are markdown. This module turns a body into a flat list of
//! blocks (headings, paragraphs, list items), derives the table of contents
//! from its headings, and lays the blocks out as terminal lines for the
//! reading view.
//!
//! Heading ids are slugs: the lowercased heading with every run of non-word
//! characters replaced by `-`, so "Caching & Performance" becomes
//! `caching-performance`.

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use regex::Regex;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("slug pattern is valid"));

pub fn slugify(heading: &str) -> String {
    NON_WORD
        .replace_all(&heading.to_lowercase(), "-")
        .into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading { id: String, level: u8, text: String },
    Paragraph(String),
    ListItem(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    Heading,
    Text,
    Bullet,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutLine {
    pub kind: LineKind,
    pub text: String,
}

impl LayoutLine {
    fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        let source = dedent(body);
        let mut blocks = Vec::new();
        let mut buf = String::new();
        let mut heading: Option<u8> = None;
        let mut item_depth = 0usize;

        for event in Parser::new(&source) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    buf.clear();
                    heading = Some(level as u8);
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(level) = heading.take() {
                        let text = buf.trim().to_string();
                        blocks.push(Block::Heading {
                            id: slugify(&text),
                            level,
                            text,
                        });
                    }
                    buf.clear();
                }
                Event::Start(Tag::Item) => {
                    item_depth += 1;
                    buf.clear();
                }
                Event::End(TagEnd::Item) => {
                    item_depth = item_depth.saturating_sub(1);
                    push_text(&mut blocks, &mut buf, Block::ListItem);
                }
                Event::Start(Tag::Paragraph) if item_depth == 0 => buf.clear(),
                Event::End(TagEnd::Paragraph) if item_depth == 0 => {
                    push_text(&mut blocks, &mut buf, Block::Paragraph);
                }
                Event::Text(text) | Event::Code(text) => buf.push_str(&text),
                Event::SoftBreak | Event::HardBreak => buf.push(' '),
                _ => {}
            }
        }

        Self { blocks }
    }

    pub fn toc(&self) -> Vec<TocEntry> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { id, text, .. } => Some(TocEntry {
                    id: id.clone(),
                    label: text.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    /// Lays the document out in lines no wider than `width` columns.
    pub fn layout(&self, width: usize) -> Vec<LayoutLine> {
        let width = width.max(8);
        let mut lines = Vec::new();
        let mut prev_was_item = false;

        for block in &self.blocks {
            let is_item = matches!(block, Block::ListItem(_));
            if !lines.is_empty() && !(is_item && prev_was_item) {
                lines.push(LayoutLine::blank());
            }
            prev_was_item = is_item;

            match block {
                Block::Heading { text, .. } => {
                    for text in wrap(text, width) {
                        lines.push(LayoutLine {
                            kind: LineKind::Heading,
                            text,
                        });
                    }
                }
                Block::Paragraph(text) => {
                    for text in wrap(text, width) {
                        lines.push(LayoutLine {
                            kind: LineKind::Text,
                            text,
                        });
                    }
                }
                Block::ListItem(text) => {
                    for (i, text) in wrap(text, width - 2).into_iter().enumerate() {
                        let prefix = if i == 0 { "• " } else { "  " };
                        lines.push(LayoutLine {
                            kind: LineKind::Bullet,
                            text: format!("{}{}", prefix, text),
                        });
                    }
                }
            }
        }

        lines
    }
}

fn push_text(blocks: &mut Vec<Block>, buf: &mut String, make: fn(String) -> Block) {
    let text = buf.trim();
    if !text.is_empty() {
        blocks.push(make(text.to_string()));
    }
    buf.clear();
}

/// Strips the indentation shared by all non-blank lines.
fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|l| {
            if l.trim().is_empty() {
                ""
            } else {
                l.get(indent..).unwrap_or_else(|| l.trim_start())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Greedy word wrap by display width. Words wider than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if word.width() <= width {
            current.push_str(word);
        } else {
            for ch in word.chars() {
                if current.width() + ch.width().unwrap_or(0) > width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "## Introduction\n\nBuilding scalable SaaS is more than picking a stack.\n\n## Key Architectural Patterns\n\n- Microservices\n- Event-driven design\n\n## Caching & Performance\n\nHow to use Redis, CDNs, etc.";

    #[test]
    fn slugs_match_heading_anchors() {
        assert_eq!(slugify("Why Scalability Matters"), "why-scalability-matters");
        assert_eq!(slugify("Caching & Performance"), "caching-performance");
        assert_eq!(slugify("Monitoring & Observability"), "monitoring-observability");
    }

    #[test]
    fn parses_headings_paragraphs_and_items() {
        let doc = Document::parse(BODY);
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading {
                    id: "introduction".into(),
                    level: 2,
                    text: "Introduction".into()
                },
                Block::Paragraph("Building scalable SaaS is more than picking a stack.".into()),
                Block::Heading {
                    id: "key-architectural-patterns".into(),
                    level: 2,
                    text: "Key Architectural Patterns".into()
                },
                Block::ListItem("Microservices".into()),
                Block::ListItem("Event-driven design".into()),
                Block::Heading {
                    id: "caching-performance".into(),
                    level: 2,
                    text: "Caching & Performance".into()
                },
                Block::Paragraph("How to use Redis, CDNs, etc.".into()),
            ]
        );
    }

    #[test]
    fn toc_lists_headings_in_order() {
        let toc = Document::parse(BODY).toc();
        let ids: Vec<_> = toc.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["introduction", "key-architectural-patterns", "caching-performance"]
        );
        assert_eq!(toc[2].label, "Caching & Performance");
    }

    #[test]
    fn indented_bodies_are_dedented() {
        let body = "\n        ## Principles\n        In this guide we explore.\n      ";
        let doc = Document::parse(body);
        assert_eq!(doc.toc().len(), 1);
        assert_eq!(doc.blocks[1], Block::Paragraph("In this guide we explore.".into()));
    }

    #[test]
    fn layout_wraps_and_separates_blocks() {
        let doc = Document::parse(BODY);
        let lines = doc.layout(20);
        assert!(lines.iter().all(|l| l.text.width() <= 20));
        assert_eq!(lines[0].kind, LineKind::Heading);
        assert_eq!(lines[1].kind, LineKind::Blank);

        let bullets: Vec<_> = lines
            .iter()
            .filter(|l| l.kind == LineKind::Bullet && l.text.starts_with('•'))
            .collect();
        assert_eq!(bullets.len(), 2);
    }

    #[test]
    fn wrap_splits_overlong_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn empty_body_has_no_lines() {
        assert!(Document::parse("").layout(80).is_empty());
    }
}
