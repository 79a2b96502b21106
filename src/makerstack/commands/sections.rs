use crate::commands::{CmdResult, SectionEntry};
use crate::error::Result;
use crate::navigation::Section;
use crate::store::ContentStore;

/// The navigation menu with the number of items behind each entry.
pub fn run<S: ContentStore>(store: &S) -> Result<CmdResult> {
    let items = store.list_items()?;
    let sections = Section::all()
        .iter()
        .map(|section| SectionEntry {
            section: *section,
            count: items.iter().filter(|i| i.kind == section.kind()).count(),
        })
        .collect();
    Ok(CmdResult::default().with_sections(sections))
}
