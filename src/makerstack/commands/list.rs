use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::ContentQuery;
use crate::navigation::Section;
use crate::store::ContentStore;

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub section: Option<Section>,
    pub category: Option<String>,
}

pub fn run<S: ContentStore>(store: &S, options: &ListOptions) -> Result<CmdResult> {
    let mut query = ContentQuery::default();
    if let Some(section) = options.section {
        query = query.with_kind(section.kind());
    }
    if let Some(category) = &options.category {
        query = query.with_category(category.clone());
    }

    let items = query.apply(&store.list_items()?);
    let mut result = CmdResult::default();
    if items.is_empty() {
        result.add_message(CmdMessage::info("No content found."));
    }
    Ok(result.with_listed_items(items))
}
