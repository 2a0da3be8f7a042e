//! Inline list rendering for note/meditation collections.
//!
//! # Responsibility
//! - Render each entry as a self-contained block: title, display date,
//!   fully expanded body.
//! - Render the fixed empty-state text when a collection yields nothing.
//!
//! # Invariants
//! - Exactly one of `blocks` / `empty_state` is populated per view.
//! - Entries are never dropped: blank titles and missing dates render as
//!   empty text instead of removing the entry.
//! - Input order is preserved; ordering is the store's responsibility.

use crate::datefmt::format_display_date;
use crate::model::entry::ContentEntry;
use serde::Serialize;

/// Empty-state text for the meditations list view.
pub const EMPTY_STATE_MEDITATIONS: &str = "No meditations found";
/// Empty-state text for the notes list view.
pub const EMPTY_STATE_NOTES: &str = "No notes found";

/// One rendered list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryBlock {
    /// Display title. Empty when the entry carries no title.
    pub title: String,
    /// Normalized display date (`"January 20, 2024"`), or empty.
    pub date: String,
    /// The full body, not a summary.
    pub body: String,
}

/// Presentation tree for one list render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Rendered entry blocks in input order.
    pub blocks: Vec<EntryBlock>,
    /// Fixed empty-state text, set only when `blocks` is empty.
    pub empty_state: Option<String>,
}

impl ListView {
    /// Returns whether this view renders the empty state.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Renders entries into a list view, or the empty state when there are
/// none.
///
/// Pure and total: malformed entries degrade field by field (blank title,
/// empty date via the date normalizer) and are still rendered.
pub fn render_entries(entries: &[ContentEntry], empty_state_text: &str) -> ListView {
    if entries.is_empty() {
        return ListView {
            blocks: Vec::new(),
            empty_state: Some(empty_state_text.to_string()),
        };
    }

    let blocks = entries
        .iter()
        .map(|entry| EntryBlock {
            title: entry.title.clone(),
            date: format_display_date(entry.date.as_deref()),
            body: entry.body.clone(),
        })
        .collect();

    ListView {
        blocks,
        empty_state: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{render_entries, EMPTY_STATE_MEDITATIONS};
    use crate::model::entry::ContentEntry;

    #[test]
    fn empty_input_renders_only_the_empty_state() {
        let view = render_entries(&[], EMPTY_STATE_MEDITATIONS);
        assert!(view.is_empty());
        assert!(view.blocks.is_empty());
        assert_eq!(view.empty_state.as_deref(), Some("No meditations found"));
    }

    #[test]
    fn blank_title_renders_instead_of_dropping_the_entry() {
        let entries = [ContentEntry::new(
            "untitled",
            "notes",
            "",
            Some("2024-01-20".to_string()),
            "the body",
        )];
        let view = render_entries(&entries, EMPTY_STATE_MEDITATIONS);
        assert_eq!(view.blocks.len(), 1);
        assert_eq!(view.blocks[0].title, "");
        assert_eq!(view.blocks[0].date, "January 20, 2024");
        assert_eq!(view.blocks[0].body, "the body");
        assert_eq!(view.empty_state, None);
    }
}
