//! Content store contracts and filesystem implementation.
//!
//! # Responsibility
//! - Define the query seam the hosting site supplies collections through.
//! - Load markdown collections from disk into `ContentEntry` values.
//!
//! # Invariants
//! - `list` returns a fresh `Vec` per call, ordered as the query asks.
//! - Date ordering treats missing/unparseable dates as oldest; ties are
//!   broken by `slug ASC` so output is deterministic.
//! - A missing collection directory is an empty collection, not an error.

use crate::content::frontmatter::parse_document;
use crate::model::entry::ContentEntry;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for collection loading.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure while reading a collection.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Requested ordering for a collection listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first. Undated entries land at the end.
    #[default]
    DateDesc,
    /// Oldest first. Undated entries land at the start.
    DateAsc,
}

/// Query options for listing one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Collection name, e.g. `notes`.
    pub collection: String,
    /// Requested ordering over the entry `date` field.
    pub order: SortOrder,
}

impl ListQuery {
    /// Builds a query with the default newest-first ordering.
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            order: SortOrder::default(),
        }
    }
}

/// Query seam over the site's content collections.
///
/// The hosting framework supplies the real collection source; this trait
/// is the only capability list rendering depends on.
pub trait ContentStore {
    /// Lists one collection, ordered as the query asks.
    fn list(&self, query: &ListQuery) -> StoreResult<Vec<ContentEntry>>;
}

/// Sorts entries in place by their parsed date, ties broken by slug.
///
/// Missing and unparseable dates compare as oldest under both orders.
pub fn sort_entries(entries: &mut [ContentEntry], order: SortOrder) {
    entries.sort_by(|a, b| {
        let by_date = match order {
            SortOrder::DateDesc => b.sort_key().cmp(&a.sort_key()),
            SortOrder::DateAsc => a.sort_key().cmp(&b.sort_key()),
        };
        by_date.then_with(|| a.slug.cmp(&b.slug))
    });
}

/// Filesystem-backed content store.
///
/// Collections are subdirectories of the content root; every `.md` file
/// under a collection (recursively) becomes one entry. The slug is the
/// file path relative to the collection, without the extension.
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    /// Creates a store rooted at the given content directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn load_entry(&self, path: &Path, collection: &str) -> Option<ContentEntry> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                // Skip-with-warning: one unreadable file must not take the
                // whole listing down.
                warn!(
                    "event=entry_read module=store status=skipped path={} error={err}",
                    path.display()
                );
                return None;
            }
        };

        let slug = slug_for(path, &self.root.join(collection))?;
        let (meta, body) = parse_document(&raw);
        Some(ContentEntry::new(slug, collection, meta.title, meta.date, body))
    }
}

impl ContentStore for FsContentStore {
    fn list(&self, query: &ListQuery) -> StoreResult<Vec<ContentEntry>> {
        let dir = self.root.join(&query.collection);
        if !dir.is_dir() {
            info!(
                "event=collection_list module=store status=ok collection={} entries=0 missing_dir=true",
                query.collection
            );
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        collect_markdown_files(&dir, &mut files)?;

        let mut entries: Vec<ContentEntry> = files
            .iter()
            .filter_map(|path| self.load_entry(path, &query.collection))
            .collect();
        sort_entries(&mut entries, query.order);

        info!(
            "event=collection_list module=store status=ok collection={} entries={}",
            query.collection,
            entries.len()
        );
        Ok(entries)
    }
}

fn collect_markdown_files(dir: &Path, out: &mut Vec<PathBuf>) -> StoreResult<()> {
    let listing = std::fs::read_dir(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for item in listing {
        let item = item.map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = item.path();
        if path.is_dir() {
            collect_markdown_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            out.push(path);
        }
    }

    Ok(())
}

fn slug_for(path: &Path, collection_dir: &Path) -> Option<String> {
    let relative = path.strip_prefix(collection_dir).ok()?;
    let without_ext = relative.with_extension("");
    let slug = without_ext
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::{sort_entries, SortOrder};
    use crate::model::entry::ContentEntry;

    fn entry(slug: &str, date: Option<&str>) -> ContentEntry {
        ContentEntry::new(slug, "notes", slug, date.map(str::to_string), "body")
    }

    #[test]
    fn undated_entries_sort_as_oldest() {
        let mut entries = vec![
            entry("undated", None),
            entry("new", Some("2024-06-01")),
            entry("old", Some("2023-01-01")),
        ];
        sort_entries(&mut entries, SortOrder::DateDesc);
        let slugs: Vec<&str> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, ["new", "old", "undated"]);
    }

    #[test]
    fn date_ties_break_by_slug() {
        let mut entries = vec![
            entry("b", Some("2024-06-01")),
            entry("a", Some("2024-06-01")),
        ];
        sort_entries(&mut entries, SortOrder::DateDesc);
        assert_eq!(entries[0].slug, "a");
    }

    #[test]
    fn ascending_order_puts_undated_first() {
        let mut entries = vec![
            entry("new", Some("2024-06-01")),
            entry("undated", None),
        ];
        sort_entries(&mut entries, SortOrder::DateAsc);
        assert_eq!(entries[0].slug, "undated");
    }
}
