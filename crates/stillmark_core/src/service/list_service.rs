//! List rendering use-case service.
//!
//! # Responsibility
//! - Query one collection through the `ContentStore` seam and render it.
//! - Bind the fixed per-view collection names and empty-state texts.
//!
//! # Invariants
//! - An empty collection renders the empty state, never an error.
//! - Store I/O failure is surfaced as a typed error; the caller decides
//!   between failing the render and falling back to the empty state.

use crate::content::store::{ContentStore, ListQuery, StoreError};
use crate::render::list::{
    render_entries, ListView, EMPTY_STATE_MEDITATIONS, EMPTY_STATE_NOTES,
};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Both inline list views read the shared `notes` collection; they differ
/// only in presentation and empty-state wording.
const LIST_COLLECTION: &str = "notes";

/// Service error for list rendering use-cases.
#[derive(Debug)]
pub enum ListServiceError {
    /// Content store failed to produce the collection.
    Store(StoreError),
}

impl Display for ListServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ListServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ListServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// List service facade over a content store.
pub struct ListService<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> ListService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Renders one collection newest-first with the given empty state.
    pub fn render(
        &self,
        collection: &str,
        empty_state_text: &str,
    ) -> Result<ListView, ListServiceError> {
        let query = ListQuery::new(collection);
        let entries = match self.store.list(&query) {
            Ok(entries) => entries,
            Err(err) => {
                error!(
                    "event=list_render module=service status=error collection={collection} error={err}"
                );
                return Err(err.into());
            }
        };

        info!(
            "event=list_render module=service status=ok collection={collection} entries={}",
            entries.len()
        );
        Ok(render_entries(&entries, empty_state_text))
    }

    /// Renders the inline meditations view.
    pub fn meditations(&self) -> Result<ListView, ListServiceError> {
        self.render(LIST_COLLECTION, EMPTY_STATE_MEDITATIONS)
    }

    /// Renders the notes card view.
    pub fn notes(&self) -> Result<ListView, ListServiceError> {
        self.render(LIST_COLLECTION, EMPTY_STATE_NOTES)
    }
}
