//! CLI probe for rendering a content collection.
//!
//! # Responsibility
//! - Provide a minimal executable to inspect what a list view renders for
//!   a local content directory.
//! - Keep output deterministic for quick local sanity checks.

use stillmark_core::{FsContentStore, ListService, EMPTY_STATE_NOTES};

fn main() {
    let mut args = std::env::args().skip(1);
    let root = args.next().unwrap_or_else(|| "content".to_string());
    let collection = args.next().unwrap_or_else(|| "notes".to_string());

    let service = ListService::new(FsContentStore::new(&root));
    let view = match service.render(&collection, EMPTY_STATE_NOTES) {
        Ok(view) => view,
        Err(err) => {
            eprintln!("stillmark: {err}");
            std::process::exit(1);
        }
    };

    println!("stillmark_core version={}", stillmark_core::core_version());
    if let Some(empty_state) = &view.empty_state {
        println!("{empty_state}");
        return;
    }
    for block in &view.blocks {
        println!("## {} ({})", block.title, block.date);
        println!("{}", block.body);
    }
}
