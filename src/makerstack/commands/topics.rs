use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::catalog::categories;
use crate::store::ContentStore;

/// Values accepted by `--category`: "All", then each category in catalog order.
pub fn run<S: ContentStore>(store: &S) -> Result<CmdResult> {
    let items = store.list_items()?;
    Ok(CmdResult::default().with_topics(categories(&items)))
}
