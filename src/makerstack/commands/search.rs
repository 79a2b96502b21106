use crate::commands::{CmdMessage, CmdResult, SearchHit};
use crate::error::Result;
use crate::filter::ContentQuery;
use crate::highlight::highlight;
use crate::model::ContentItem;
use crate::store::ContentStore;

pub fn run<S: ContentStore>(store: &S, query: &ContentQuery) -> Result<CmdResult> {
    let items = query.apply(&store.list_items()?);
    tracing::debug!(query = %query.text, hits = items.len(), "search");

    let hits = to_hits(items, &query.text);
    let mut result = CmdResult::default();
    let term = query.text.trim();
    match hits.len() {
        0 => result.add_message(CmdMessage::info(format!("No results for '{}'.", term))),
        _ if term.is_empty() => {}
        1 => result.add_message(CmdMessage::info(format!("1 result for '{}'", term))),
        n => result.add_message(CmdMessage::info(format!("{} results for '{}'", n, term))),
    }
    Ok(result.with_hits(hits))
}

/// Pairs already-filtered items with their highlighted title and description.
pub fn to_hits(items: Vec<ContentItem>, query: &str) -> Vec<SearchHit> {
    // Whitespace-only queries match everything, so nothing is emphasized.
    let emphasis = if query.trim().is_empty() { "" } else { query };
    items
        .into_iter()
        .map(|item| SearchHit {
            title: highlight(&item.title, emphasis),
            description: highlight(&item.short_description, emphasis),
            item,
        })
        .collect()
}
