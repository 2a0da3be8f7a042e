//! Core content logic for Stillmark, a personal notes & meditations site.
//! This crate is the single source of truth for listing and display rules.

pub mod config;
pub mod content;
pub mod datefmt;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use config::{ConfigError, SiteConfig};
pub use content::frontmatter::{parse_document, Frontmatter};
pub use content::store::{
    sort_entries, ContentStore, FsContentStore, ListQuery, SortOrder, StoreError, StoreResult,
};
pub use datefmt::{format_display_date, parse_flexible};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::ContentEntry;
pub use render::list::{
    render_entries, EntryBlock, ListView, EMPTY_STATE_MEDITATIONS, EMPTY_STATE_NOTES,
};
pub use service::list_service::{ListService, ListServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
