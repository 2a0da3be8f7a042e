//! Presentation-tree rendering for content listings.
//!
//! # Responsibility
//! - Turn ordered entry sequences into renderable list views.
//!
//! # Invariants
//! - Rendering is pure: no I/O, no mutation of the underlying store.

pub mod list;
