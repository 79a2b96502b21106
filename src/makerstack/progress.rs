//! # Reading Progress
//!
//! Converts a scroll position into a 0-100 "reading progress" percentage.
//!
//! [`compute_progress`] is the pure calculation. [`ScrollProgressTracker`]
//! wraps it for views that need to push updates to several observers (the
//! progress bar, the floating bottom bar): each observer holds a
//! [`ProgressSubscription`], and dropping it is the whole unsubscribe story.

use tokio::sync::watch;

/// Percentage of the scrollable distance covered by `scroll_offset`.
///
/// Returns 0 when the document fits in the viewport. Out-of-range and
/// non-finite inputs are clamped, never reported as errors.
pub fn compute_progress(scroll_offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }

    let percent = scroll_offset / scrollable * 100.0;
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Offset past the content top after which the bottom bar is shown.
pub const DEFAULT_BOTTOM_BAR_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadingProgress {
    pub percent: f64,
    pub show_bottom_bar: bool,
}

/// Geometry of the scrolled content, in any consistent unit (pixels, lines).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentGeometry {
    /// Offset of the content from the top of the page.
    pub content_top: f64,
    pub content_height: f64,
    pub viewport_height: f64,
}

impl ContentGeometry {
    pub fn new(content_height: f64, viewport_height: f64) -> Self {
        Self {
            content_top: 0.0,
            content_height,
            viewport_height,
        }
    }

    pub fn with_content_top(mut self, content_top: f64) -> Self {
        self.content_top = content_top;
        self
    }
}

/// Publishes [`ReadingProgress`] to scoped subscribers.
pub struct ScrollProgressTracker {
    geometry: ContentGeometry,
    bottom_bar_threshold: f64,
    sender: watch::Sender<ReadingProgress>,
}

/// A live view of the tracker's progress. Dropping it unsubscribes.
pub struct ProgressSubscription {
    receiver: watch::Receiver<ReadingProgress>,
}

impl ProgressSubscription {
    pub fn current(&self) -> ReadingProgress {
        *self.receiver.borrow()
    }

    /// Waits for the next published value. Returns `None` once the tracker
    /// is gone.
    pub async fn changed(&mut self) -> Option<ReadingProgress> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}

impl ScrollProgressTracker {
    pub fn new(geometry: ContentGeometry) -> Self {
        let (sender, _) = watch::channel(ReadingProgress::default());
        Self {
            geometry,
            bottom_bar_threshold: DEFAULT_BOTTOM_BAR_THRESHOLD,
            sender,
        }
    }

    pub fn with_bottom_bar_threshold(mut self, threshold: f64) -> Self {
        self.bottom_bar_threshold = threshold;
        self
    }

    pub fn subscribe(&self) -> ProgressSubscription {
        ProgressSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Handles a scroll event at page offset `scroll_y`.
    pub fn on_scroll(&self, scroll_y: f64) -> ReadingProgress {
        let g = self.geometry;
        let progress = ReadingProgress {
            percent: compute_progress(scroll_y - g.content_top, g.content_height, g.viewport_height),
            show_bottom_bar: scroll_y > g.content_top + self.bottom_bar_threshold,
        };
        self.sender.send_replace(progress);
        progress
    }

    pub fn current(&self) -> ReadingProgress {
        *self.sender.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_is_zero_and_bottom_is_hundred() {
        assert_eq!(compute_progress(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(compute_progress(1200.0, 2000.0, 800.0), 100.0);
        assert_eq!(compute_progress(600.0, 2000.0, 800.0), 50.0);
    }

    #[test]
    fn no_scrollable_distance_is_zero() {
        for x in [0.0, 10.0, 1e9, -5.0] {
            assert_eq!(compute_progress(x, 800.0, 800.0), 0.0);
            assert_eq!(compute_progress(x, 500.0, 800.0), 0.0);
        }
    }

    #[test]
    fn out_of_range_offsets_clamp() {
        assert_eq!(compute_progress(-50.0, 2000.0, 800.0), 0.0);
        assert_eq!(compute_progress(5000.0, 2000.0, 800.0), 100.0);
        assert_eq!(compute_progress(f64::NAN, 2000.0, 800.0), 0.0);
        assert_eq!(compute_progress(f64::INFINITY, 2000.0, 800.0), 100.0);
        assert_eq!(compute_progress(10.0, f64::NAN, 800.0), 0.0);
    }

    #[test]
    fn monotonic_in_offset() {
        let mut last = -1.0;
        for step in 0..=150 {
            let p = compute_progress(step as f64 * 10.0, 2000.0, 800.0);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn tracker_accounts_for_content_top() {
        let geometry = ContentGeometry::new(1800.0, 800.0).with_content_top(400.0);
        let tracker = ScrollProgressTracker::new(geometry);

        let p = tracker.on_scroll(400.0);
        assert_eq!(p.percent, 0.0);
        assert!(!p.show_bottom_bar);

        let p = tracker.on_scroll(900.0);
        assert_eq!(p.percent, 50.0);
        assert!(p.show_bottom_bar);
    }

    #[test]
    fn subscribers_see_latest_value_and_unsubscribe_on_drop() {
        let tracker = ScrollProgressTracker::new(ContentGeometry::new(300.0, 100.0));
        let first = tracker.subscribe();
        let second = tracker.subscribe();
        assert_eq!(tracker.subscriber_count(), 2);

        tracker.on_scroll(100.0);
        assert_eq!(first.current().percent, 50.0);
        assert_eq!(second.current().percent, 50.0);

        drop(first);
        assert_eq!(tracker.subscriber_count(), 1);
        drop(second);
        assert_eq!(tracker.subscriber_count(), 0);

        // Publishing without subscribers is fine.
        tracker.on_scroll(200.0);
        assert_eq!(tracker.current().percent, 100.0);
    }

    #[tokio::test]
    async fn changed_ends_when_tracker_is_dropped() {
        let tracker = ScrollProgressTracker::new(ContentGeometry::new(300.0, 100.0));
        let mut sub = tracker.subscribe();

        tracker.on_scroll(50.0);
        assert_eq!(sub.changed().await.map(|p| p.percent), Some(25.0));

        drop(tracker);
        assert_eq!(sub.changed().await, None);
    }
}
