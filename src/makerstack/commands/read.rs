use crate::commands::{CmdMessage, CmdResult, ReadingWindow};
use crate::document::Document;
use crate::error::{MakerError, Result};
use crate::navigation::COMING_SOON_NOTICE;
use crate::progress::{ContentGeometry, ScrollProgressTracker};
use crate::store::ContentStore;

/// Lines scrolled past the top before the bottom bar appears.
pub const BOTTOM_BAR_LINES: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// First visible line.
    pub offset: usize,
    /// Visible lines.
    pub height: usize,
    /// Column width the body is wrapped to.
    pub width: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            height: 20,
            width: 72,
        }
    }
}

/// Lays out the body of `id` and returns the window at `options.offset`
/// together with the reading progress at that position.
pub fn run<S: ContentStore>(store: &S, id: &str, options: &ReadOptions) -> Result<CmdResult> {
    let item = match store.get_item(id) {
        Ok(item) => item,
        Err(MakerError::ContentNotFound(_)) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(COMING_SOON_NOTICE));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let lines = Document::parse(item.full_body.as_deref().unwrap_or_default()).layout(options.width);
    let total_lines = lines.len();
    let height = options.height.max(1);
    let offset = options.offset.min(total_lines.saturating_sub(height));

    let tracker = ScrollProgressTracker::new(ContentGeometry::new(total_lines as f64, height as f64))
        .with_bottom_bar_threshold(BOTTOM_BAR_LINES);
    let progress = tracker.on_scroll(offset as f64);

    let visible = lines.into_iter().skip(offset).take(height).collect();
    Ok(CmdResult::default().with_reading(ReadingWindow {
        item,
        lines: visible,
        offset,
        total_lines,
        progress,
    }))
}
