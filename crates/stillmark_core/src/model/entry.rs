//! Content entry domain model.
//!
//! # Responsibility
//! - Define the canonical record for one published note/meditation item.
//! - Provide the ordering key used by date-sorted listings.
//!
//! # Invariants
//! - Entries are immutable once loaded for a given render.
//! - A missing or unparseable `date` never invalidates an entry; it only
//!   affects ordering (sorted as oldest) and display (blank date).

use crate::datefmt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One published content item loaded from a collection.
///
/// Leniency is deliberate: entries with an empty `title` or absent `date`
/// stay renderable instead of being dropped, so a half-filled frontmatter
/// block never makes content disappear from the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Path-derived identifier, unique within its collection.
    pub slug: String,
    /// Collection name this entry was loaded from (e.g. `notes`).
    pub collection: String,
    /// Display title. May be empty; blank titles still render.
    pub title: String,
    /// Raw frontmatter date text, if any. Kept verbatim for display
    /// normalization at render time.
    pub date: Option<String>,
    /// Full markdown body, never truncated.
    pub body: String,
}

impl ContentEntry {
    /// Creates an entry from its loaded parts.
    pub fn new(
        slug: impl Into<String>,
        collection: impl Into<String>,
        title: impl Into<String>,
        date: Option<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            collection: collection.into(),
            title: title.into(),
            date,
            body: body.into(),
        }
    }

    /// Returns the parsed calendar date used for ordering.
    ///
    /// `None` (missing or unparseable date) sorts before every real date,
    /// so undated entries land at the oldest end of a descending list.
    pub fn sort_key(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(datefmt::parse_flexible)
    }
}

#[cfg(test)]
mod tests {
    use super::ContentEntry;
    use chrono::NaiveDate;

    #[test]
    fn sort_key_parses_frontmatter_date() {
        let entry = ContentEntry::new(
            "a",
            "notes",
            "A",
            Some("2024-01-20".to_string()),
            "body",
        );
        assert_eq!(entry.sort_key(), NaiveDate::from_ymd_opt(2024, 1, 20));
    }

    #[test]
    fn sort_key_is_none_for_missing_or_invalid_date() {
        let missing = ContentEntry::new("a", "notes", "A", None, "body");
        assert_eq!(missing.sort_key(), None);

        let invalid =
            ContentEntry::new("b", "notes", "B", Some("not-a-date".to_string()), "body");
        assert_eq!(invalid.sort_key(), None);
    }
}
