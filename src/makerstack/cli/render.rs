//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Every renderer returns a
//! `String` so output can be tested without a terminal; the `print_*`
//! helpers are the only functions here that write to stdout.
//!
//! Layout math (widths, truncation, padding) is done on unstyled spans and
//! styles are applied last, so ANSI codes never count against a width.

use super::styles::{
    paint, BAR_EMPTY, BAR_FILLED, BRAND, HEADING, INDEX, KIND, MATCH, META, TITLE,
};
use colored::Colorize;
use console::Style;
use makerstack::api::{CmdMessage, MessageLevel};
use makerstack::commands::{DetailView, ReadingWindow, SearchHit, SectionEntry};
use makerstack::config::{SiteConfig, CONFIG_KEYS};
use makerstack::document::LineKind;
use makerstack::filter::ALL_CATEGORIES;
use makerstack::highlight::Segment;
use makerstack::model::ContentItem;
use makerstack::navigation::{Layout, Section, SiteOptions};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const CARD_WIDTH: usize = 34;
const CARD_GAP: &str = "   ";
const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone)]
struct Span {
    text: String,
    style: Option<&'static Style>,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    fn styled(text: impl Into<String>, style: &'static Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

fn segment_spans(segments: &[Segment], base: Option<&'static Style>) -> Vec<Span> {
    segments
        .iter()
        .map(|s| Span {
            text: s.content.clone(),
            style: if s.is_match { Some(&*MATCH) } else { base },
        })
        .collect()
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.text.width()).sum()
}

/// Cuts spans to `max_width` columns, ending with '…' when anything was cut.
fn truncate_spans(spans: Vec<Span>, max_width: usize) -> Vec<Span> {
    if spans_width(&spans) <= max_width {
        return spans;
    }

    let limit = max_width.saturating_sub(1);
    let mut out = Vec::new();
    let mut used = 0;
    for span in spans {
        let mut text = String::new();
        let mut full = false;
        for c in span.text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > limit {
                full = true;
                break;
            }
            text.push(c);
            used += w;
        }
        if full {
            text.push('…');
            out.push(Span { text, ..span });
            return out;
        }
        out.push(Span { text, ..span });
    }
    out
}

fn paint_spans(spans: &[Span], use_color: Option<bool>) -> String {
    spans
        .iter()
        .map(|s| match s.style {
            Some(style) => paint(style, &s.text, use_color),
            None => s.text.clone(),
        })
        .collect()
}

/// Truncates, pads to exactly `width` columns, then paints.
fn fit(spans: Vec<Span>, width: usize, use_color: Option<bool>) -> String {
    let spans = truncate_spans(spans, width);
    let padding = width.saturating_sub(spans_width(&spans));
    format!("{}{}", paint_spans(&spans, use_color), " ".repeat(padding))
}

fn meta_line(item: &ContentItem) -> String {
    [
        item.published_date.as_str(),
        item.estimated_read_time.as_str(),
    ]
    .iter()
    .filter(|s| !s.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" · ")
}

pub fn render_header(options: &SiteOptions, use_color: Option<bool>) -> String {
    let mut out = paint(&BRAND, &options.brand, use_color);
    out.push_str("   ");
    let menu: Vec<&str> = Section::all().iter().map(|s| s.label()).collect();
    out.push_str(&menu.join(" · "));
    if options.show_search {
        out.push_str("   ");
        out.push_str(&paint(&META, "[search]", use_color));
    }
    if options.show_auth_dialog {
        out.push_str("   ");
        out.push_str(&paint(&META, "[sign in]", use_color));
    }
    out.push('\n');
    out
}

pub fn render_hits(hits: &[SearchHit], layout: Layout, width: usize) -> String {
    render_hits_internal(hits, layout, width, None)
}

fn render_hits_internal(
    hits: &[SearchHit],
    layout: Layout,
    width: usize,
    use_color: Option<bool>,
) -> String {
    if hits.is_empty() {
        return String::new();
    }
    match layout {
        Layout::Grid => render_grid(hits, width, use_color),
        Layout::List => render_list(hits, width, use_color),
    }
}

fn card_lines(hit: &SearchHit, use_color: Option<bool>) -> Vec<String> {
    let item = &hit.item;
    let mut kind = vec![Span::styled(item.kind.label(), &KIND)];
    if !item.category.is_empty() {
        kind.push(Span::styled(format!(" · {}", item.category), &META));
    }

    vec![
        fit(kind, CARD_WIDTH, use_color),
        fit(segment_spans(&hit.title, Some(&*TITLE)), CARD_WIDTH, use_color),
        fit(segment_spans(&hit.description, None), CARD_WIDTH, use_color),
        fit(
            vec![
                Span::styled(format!("#{} ", item.id), &INDEX),
                Span::styled(meta_line(item), &META),
            ],
            CARD_WIDTH,
            use_color,
        ),
    ]
}

fn render_grid(hits: &[SearchHit], width: usize, use_color: Option<bool>) -> String {
    let columns = ((width + CARD_GAP.len()) / (CARD_WIDTH + CARD_GAP.len())).max(1);
    let mut out = String::new();

    for (row_idx, row) in hits.chunks(columns).enumerate() {
        if row_idx > 0 {
            out.push('\n');
        }
        let cards: Vec<Vec<String>> = row.iter().map(|h| card_lines(h, use_color)).collect();
        for line in 0..4 {
            let joined = cards
                .iter()
                .map(|c| c[line].as_str())
                .collect::<Vec<_>>()
                .join(CARD_GAP);
            out.push_str(joined.trim_end());
            out.push('\n');
        }
    }
    out
}

fn render_list(hits: &[SearchHit], width: usize, use_color: Option<bool>) -> String {
    let mut out = String::new();
    for hit in hits {
        let item = &hit.item;
        let idx = format!("{:>3}. ", item.id);
        let right = [item.category.as_str(), item.estimated_read_time.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" · ");
        let available = width.saturating_sub(idx.width() + right.width() + 2);

        let mut left = segment_spans(&hit.title, Some(&*TITLE));
        if !item.short_description.is_empty() {
            left.push(Span::plain("  "));
            left.extend(segment_spans(&hit.description, Some(&*META)));
        }

        out.push_str(&paint(&INDEX, &idx, use_color));
        out.push_str(&fit(left, available, use_color));
        out.push_str("  ");
        out.push_str(&paint(&META, &right, use_color));
        out.push('\n');
    }
    out
}

pub fn render_detail(detail: &DetailView, show_toc: bool, width: usize) -> String {
    render_detail_internal(detail, show_toc, width, None)
}

fn render_detail_internal(
    detail: &DetailView,
    show_toc: bool,
    width: usize,
    use_color: Option<bool>,
) -> String {
    let item = &detail.item;
    let mut out = String::new();

    out.push_str(&paint(&TITLE, &item.title, use_color));
    out.push('\n');

    let mut meta = vec![item.kind.label().to_string()];
    if !item.category.is_empty() {
        meta.push(item.category.clone());
    }
    if !item.author.is_empty() {
        meta.push(format!("By {}", item.author));
    }
    let when = meta_line(item);
    if !when.is_empty() {
        meta.push(when);
    }
    out.push_str(&paint(&META, &meta.join(" · "), use_color));
    out.push('\n');

    if !item.short_description.is_empty() {
        out.push_str(&item.short_description);
        out.push('\n');
    }

    if show_toc && !detail.toc.is_empty() {
        out.push('\n');
        out.push_str(&paint(&HEADING, "Contents", use_color));
        out.push('\n');
        for (i, entry) in detail.toc.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. {}  {}\n",
                i + 1,
                entry.label,
                paint(&META, &format!("#{}", entry.id), use_color)
            ));
        }
    }

    let lines = detail.document.layout(width);
    if !lines.is_empty() {
        out.push('\n');
    }
    for line in lines {
        match line.kind {
            LineKind::Heading => out.push_str(&paint(&HEADING, &line.text, use_color)),
            _ => out.push_str(&line.text),
        }
        out.push('\n');
    }
    out
}

fn progress_bar(percent: f64, use_color: Option<bool>) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "{}{} {:>3.0}%",
        paint(&BAR_FILLED, &"█".repeat(filled), use_color),
        paint(&BAR_EMPTY, &"░".repeat(BAR_WIDTH - filled), use_color),
        percent
    )
}

pub fn render_reading(window: &ReadingWindow) -> String {
    render_reading_internal(window, None)
}

fn render_reading_internal(window: &ReadingWindow, use_color: Option<bool>) -> String {
    let mut out = String::new();
    out.push_str(&progress_bar(window.progress.percent, use_color));
    out.push_str("  ");
    out.push_str(&paint(&TITLE, &window.item.title, use_color));
    out.push_str("\n\n");

    for line in &window.lines {
        match line.kind {
            LineKind::Heading => out.push_str(&paint(&HEADING, &line.text, use_color)),
            _ => out.push_str(&line.text),
        }
        out.push('\n');
    }

    if window.total_lines > 0 {
        let last = (window.offset + window.lines.len()).min(window.total_lines);
        out.push('\n');
        out.push_str(&paint(
            &META,
            &format!(
                "lines {}-{} of {}",
                window.offset + 1,
                last,
                window.total_lines
            ),
            use_color,
        ));
        out.push('\n');
    }

    if window.progress.show_bottom_bar {
        out.push_str(&paint(
            &META,
            &format!(
                "── {} · {:.0}% read · read --offset 0 to go back to top ──",
                window.item.title, window.progress.percent
            ),
            use_color,
        ));
        out.push('\n');
    }
    out
}

pub fn render_sections(entries: &[SectionEntry], use_color: Option<bool>) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{:<10} {:>2}  {}\n",
            entry.section.label(),
            entry.count,
            paint(&META, entry.section.description(), use_color)
        ));
    }
    out
}

/// One topic per line; the "All" facet is dimmed.
pub fn render_topics(topics: &[String], use_color: Option<bool>) -> String {
    topics
        .iter()
        .map(|topic| {
            if topic == ALL_CATEGORIES {
                format!("{}\n", paint(&META, topic, use_color))
            } else {
                format!("{}\n", topic)
            }
        })
        .collect()
}

pub fn render_config(config: &SiteConfig) -> String {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|v| format!("{} = {}\n", key, v)))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use makerstack::commands::search::to_hits;
    use makerstack::document::{Document, LayoutLine};
    use makerstack::model::ContentKind;
    use makerstack::progress::ReadingProgress;

    fn items() -> Vec<ContentItem> {
        vec![
            ContentItem::new("1", "Building Scalable SaaS Architecture", ContentKind::Article)
                .with_description("Modern patterns for resilient apps")
                .with_category("Development")
                .with_published("Dec 12, 2024", "12 min read"),
            ContentItem::new("4", "Design Systems at Scale", ContentKind::Article)
                .with_category("Design")
                .with_published("Dec 8, 2024", "10 min read"),
            ContentItem::new("3", "Stack Builder Tool", ContentKind::Tool),
        ]
    }

    #[test]
    fn test_truncate_spans_adds_ellipsis() {
        let spans = vec![Span::plain("abc"), Span::styled("defgh", &TITLE)];
        let cut = truncate_spans(spans, 5);
        let text: String = cut.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(text, "abcd…");
        assert_eq!(spans_width(&cut), 5);
    }

    #[test]
    fn test_truncate_spans_keeps_short_text() {
        let cut = truncate_spans(vec![Span::plain("abc")], 5);
        assert_eq!(cut[0].text, "abc");
    }

    #[test]
    fn test_grid_places_cards_side_by_side() {
        let hits = to_hits(items(), "");
        let out = render_hits_internal(&hits, Layout::Grid, 80, Some(false));
        let lines: Vec<&str> = out.lines().collect();

        // Two columns fit in 80: one row of two cards, a blank, one card.
        assert_eq!(lines.len(), 9);
        assert!(lines[1].starts_with("Building Scalable SaaS Archite"));
        assert!(lines[1].contains("Design Systems at Scale"));
        assert!(lines[6].starts_with("Stack Builder Tool"));
        assert!(lines[0].contains("Article · Development"));
    }

    #[test]
    fn test_list_layout_one_line_per_item() {
        let hits = to_hits(items(), "scal");
        let out = render_hits_internal(&hits, Layout::List, 100, Some(false));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  1. Building Scalable"));
        assert!(lines[0].ends_with("Development · 12 min read"));
        assert!(lines.iter().all(|l| l.width() <= 100));
    }

    #[test]
    fn test_matches_are_styled_when_color_forced() {
        let hits = to_hits(items(), "scal");
        let plain = render_hits_internal(&hits, Layout::List, 100, Some(false));
        let colored = render_hits_internal(&hits, Layout::List, 100, Some(true));
        assert!(!plain.contains('\u{1b}'));
        assert!(colored.contains('\u{1b}'));
    }

    #[test]
    fn test_empty_hits_render_nothing() {
        assert_eq!(render_hits_internal(&[], Layout::Grid, 80, Some(false)), "");
    }

    #[test]
    fn test_detail_with_toc() {
        let item = items()[0].clone().with_author("Marcus Johnson");
        let document = Document::parse("## Caching & Performance\n\nUse a CDN.");
        let toc = document.toc();
        let detail = DetailView {
            item,
            document,
            toc,
        };

        let out = render_detail_internal(&detail, true, 60, Some(false));
        assert!(out.starts_with("Building Scalable SaaS Architecture\n"));
        assert!(out.contains("By Marcus Johnson · Dec 12, 2024 · 12 min read"));
        assert!(out.contains("  1. Caching & Performance  #caching-performance"));
        assert!(out.contains("Use a CDN."));

        let without = render_detail_internal(&detail, false, 60, Some(false));
        assert!(!without.contains("Contents"));
    }

    #[test]
    fn test_reading_bar_and_bottom_bar() {
        let window = ReadingWindow {
            item: items()[0].clone(),
            lines: vec![LayoutLine {
                kind: LineKind::Text,
                text: "Some text".into(),
            }],
            offset: 5,
            total_lines: 11,
            progress: ReadingProgress {
                percent: 50.0,
                show_bottom_bar: true,
            },
        };
        let out = render_reading_internal(&window, Some(false));
        let first = out.lines().next().unwrap();
        assert!(first.starts_with(&format!("{}{}", "█".repeat(15), "░".repeat(15))));
        assert!(first.contains(" 50%"));
        assert!(out.contains("lines 6-6 of 11"));
        assert!(out.contains("50% read"));
    }

    #[test]
    fn test_header_reflects_options() {
        let mut options = SiteOptions::default();
        let out = render_header(&options, Some(false));
        assert!(out.starts_with("MakerStack   Featured · Articles · Playbooks · Tools"));
        assert!(out.contains("[search]"));
        assert!(!out.contains("[sign in]"));

        options.show_search = false;
        options.show_auth_dialog = true;
        let out = render_header(&options, Some(false));
        assert!(!out.contains("[search]"));
        assert!(out.contains("[sign in]"));
    }

    #[test]
    fn test_render_topics_one_per_line() {
        let topics = vec!["All".to_string(), "No-Code".to_string()];
        assert_eq!(render_topics(&topics, Some(false)), "All\nNo-Code\n");
    }

    #[test]
    fn test_render_config_lists_every_key() {
        let out = render_config(&SiteConfig::default());
        assert_eq!(out.lines().count(), CONFIG_KEYS.len());
        assert!(out.contains("brand = MakerStack\n"));
        assert!(out.contains("layout = grid\n"));
    }

    #[test]
    fn test_render_messages_keeps_content() {
        let out = render_messages(&[
            CmdMessage::success("Successfully subscribed!"),
            CmdMessage::error("Something went wrong. Please try again."),
        ]);
        assert!(out.contains("Successfully subscribed!"));
        assert!(out.contains("Something went wrong. Please try again."));
        assert_eq!(out.lines().count(), 2);
    }
}
