use crate::commands::{CmdMessage, CmdResult, DetailView};
use crate::document::Document;
use crate::error::Result;
use crate::navigation::{Navigator, OpenOutcome, COMING_SOON_NOTICE};
use crate::store::ContentStore;

/// Opens the detail view for `id`. Unknown ids keep the grid and add a notice.
pub fn run<S: ContentStore>(store: &S, navigator: &mut Navigator, id: &str) -> Result<CmdResult> {
    let items = store.list_items()?;
    let mut result = CmdResult::default();

    match navigator.open(id, &items) {
        OpenOutcome::Opened(item) => {
            let document = Document::parse(item.full_body.as_deref().unwrap_or_default());
            let toc = document.toc();
            Ok(result.with_detail(DetailView {
                item,
                document,
                toc,
            }))
        }
        OpenOutcome::ComingSoon { .. } => {
            result.add_message(CmdMessage::warning(COMING_SOON_NOTICE));
            Ok(result)
        }
    }
}
