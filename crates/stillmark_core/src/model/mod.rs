//! Domain model for published content.
//!
//! # Responsibility
//! - Define the canonical entry shape shared by stores and renderers.
//!
//! # Invariants
//! - Entries are immutable once loaded for a render.
//! - Identity within a collection is the entry `slug`.

pub mod entry;
