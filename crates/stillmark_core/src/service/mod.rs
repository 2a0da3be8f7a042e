//! Use-case services over stores and renderers.
//!
//! # Responsibility
//! - Compose the content store and list renderer into per-view APIs.

pub mod list_service;
