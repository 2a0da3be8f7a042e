//! Content loading: frontmatter extraction and collection stores.
//!
//! # Responsibility
//! - Parse markdown documents into frontmatter metadata plus body.
//! - Provide the `ContentStore` query seam and its filesystem backend.
//!
//! # Invariants
//! - Frontmatter parsing is lenient and never fails.
//! - Store queries return a fresh, stably-ordered `Vec` per call.

pub mod frontmatter;
pub mod store;
