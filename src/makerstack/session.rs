//! # Search Session
//!
//! Owns the [`SearchState`] behind the search box. Typing updates the query
//! immediately; the result list is recomputed once input pauses for the
//! debounce delay. Submitting the form ([`SearchSession::flush`]) skips the
//! wait, and clearing resets both the query and the results at once.
//!
//! Observers read the state through a watch channel: [`SearchSession::subscribe`]
//! hands out receivers that are released when dropped.

use crate::debounce::Debouncer;
use crate::filter::ContentQuery;
use crate::model::{ContentItem, SearchState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

pub struct SearchSession {
    items: Arc<[ContentItem]>,
    base: ContentQuery,
    state: Arc<watch::Sender<SearchState>>,
    recomputations: Arc<AtomicUsize>,
    debouncer: Debouncer,
}

impl SearchSession {
    /// `base` carries the facets and searchable fields; its text is replaced
    /// by whatever is typed.
    pub fn new(items: Vec<ContentItem>, base: ContentQuery, debounce: Duration) -> Self {
        let items: Arc<[ContentItem]> = items.into();
        let initial = SearchState {
            query: String::new(),
            last_computed_results: base_results(&items, &base, ""),
        };
        let (sender, _) = watch::channel(initial);
        Self {
            items,
            base,
            state: Arc::new(sender),
            recomputations: Arc::new(AtomicUsize::new(0)),
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Number of times the result list has been recomputed.
    pub fn recomputations(&self) -> usize {
        self.recomputations.load(Ordering::SeqCst)
    }

    /// Records a keystroke. Results follow after the debounce delay.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|s| s.query = query.clone());

        let items = Arc::clone(&self.items);
        let base = self.base.clone();
        let state = Arc::clone(&self.state);
        let counter = Arc::clone(&self.recomputations);
        self.debouncer.schedule(async move {
            recompute(&items, &base, &state, &counter, &query);
        });
    }

    /// Recomputes now, dropping any pending debounce.
    pub fn flush(&mut self) {
        self.debouncer.cancel();
        let query = self.state.borrow().query.clone();
        recompute(&self.items, &self.base, &self.state, &self.recomputations, &query);
    }

    pub fn clear(&mut self) {
        self.debouncer.cancel();
        let results = base_results(&self.items, &self.base, "");
        self.state.send_modify(|s| {
            s.query.clear();
            s.last_computed_results = results;
        });
    }

    /// Waits for a pending recomputation to land.
    pub async fn settle(&mut self) {
        self.debouncer.settle().await;
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

fn base_results(items: &[ContentItem], base: &ContentQuery, text: &str) -> Vec<ContentItem> {
    let mut query = base.clone();
    query.text = text.to_string();
    query.apply(items)
}

fn recompute(
    items: &[ContentItem],
    base: &ContentQuery,
    state: &watch::Sender<SearchState>,
    counter: &AtomicUsize,
    query: &str,
) {
    // A newer keystroke owns the state now.
    if state.borrow().query != query {
        return;
    }
    let results = base_results(items, base, query);
    tracing::debug!(query, results = results.len(), "search recomputed");
    counter.fetch_add(1, Ordering::SeqCst);
    state.send_modify(|s| s.last_computed_results = results);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentKind;

    fn session() -> SearchSession {
        let items = vec![
            ContentItem::new("1", "Building Scalable SaaS Architecture", ContentKind::Article)
                .with_category("Development"),
            ContentItem::new("2", "Design Systems at Scale", ContentKind::Article)
                .with_category("Design"),
            ContentItem::new("3", "Product-Led Growth", ContentKind::Article)
                .with_category("Product"),
        ];
        SearchSession::new(items, ContentQuery::default(), Duration::from_millis(300))
    }

    fn titles(state: &SearchState) -> Vec<String> {
        state
            .last_computed_results
            .iter()
            .map(|i| i.title.clone())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn starts_with_every_item() {
        let s = session();
        assert_eq!(s.state().last_computed_results.len(), 3);
        assert_eq!(s.recomputations(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn typing_burst_recomputes_once() {
        let mut s = session();
        for q in ["s", "sc", "sca", "scal"] {
            s.set_query(q);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert_eq!(s.state().query, "scal");
        assert_eq!(s.state().last_computed_results.len(), 3);

        s.settle().await;
        assert_eq!(s.recomputations(), 1);
        assert_eq!(
            titles(&s.state()),
            vec!["Building Scalable SaaS Architecture", "Design Systems at Scale"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn flush_skips_the_delay() {
        let mut s = session();
        s.set_query("growth");
        s.flush();
        assert!(!s.is_pending());
        assert_eq!(titles(&s.state()), vec!["Product-Led Growth"]);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_resets_immediately() {
        let mut s = session();
        s.set_query("growth");
        s.settle().await;
        assert_eq!(s.state().last_computed_results.len(), 1);

        s.clear();
        let state = s.state();
        assert!(state.query.is_empty());
        assert_eq!(state.last_computed_results.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_observe_results() {
        let mut s = session();
        let mut rx = s.subscribe();
        s.set_query("design");
        s.settle().await;
        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(titles(&rx.borrow_and_update()), vec!["Design Systems at Scale"]);
    }

    #[tokio::test(start_paused = true)]
    async fn facets_in_base_query_apply() {
        let items = vec![
            ContentItem::new("1", "Scale A", ContentKind::Article).with_category("Design"),
            ContentItem::new("2", "Scale B", ContentKind::Article).with_category("Product"),
        ];
        let mut s = SearchSession::new(
            items,
            ContentQuery::default().with_category("Design"),
            Duration::from_millis(300),
        );
        assert_eq!(s.state().last_computed_results.len(), 1);
        s.set_query("scale");
        s.settle().await;
        assert_eq!(titles(&s.state()), vec!["Scale A"]);
    }
}
