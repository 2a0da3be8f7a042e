use std::fs;
use std::path::Path;
use stillmark_core::{ContentStore, FsContentStore, ListQuery, ListService};
use tempfile::TempDir;

fn write_note(root: &Path, rel_path: &str, content: &str) {
    let path = root.join(rel_path);
    fs::create_dir_all(path.parent().expect("note path has a parent")).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn missing_collection_directory_is_an_empty_collection() {
    let dir = TempDir::new().unwrap();
    let store = FsContentStore::new(dir.path());

    let entries = store.list(&ListQuery::new("notes")).unwrap();
    assert!(entries.is_empty());

    let view = ListService::new(store).meditations().unwrap();
    assert_eq!(view.empty_state.as_deref(), Some("No meditations found"));
}

#[test]
fn collection_loads_frontmatter_and_sorts_newest_first() {
    let dir = TempDir::new().unwrap();
    write_note(
        dir.path(),
        "notes/first.md",
        "---\ntitle: First Note\ndate: 2024-01-20\n---\nFirst body.\n",
    );
    write_note(
        dir.path(),
        "notes/second.md",
        "---\ntitle: Second Note\ndate: 2024-06-01\n---\nSecond body.\n",
    );

    let store = FsContentStore::new(dir.path());
    let entries = store.list(&ListQuery::new("notes")).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Second Note");
    assert_eq!(entries[0].slug, "second");
    assert_eq!(entries[0].date.as_deref(), Some("2024-06-01"));
    assert_eq!(entries[1].title, "First Note");
    assert_eq!(entries[1].body, "First body.\n");
}

#[test]
fn nested_files_are_included_with_path_slugs() {
    let dir = TempDir::new().unwrap();
    write_note(
        dir.path(),
        "notes/2024/june/walk.md",
        "---\ntitle: Walk\ndate: 2024-06-10\n---\nOn walking.\n",
    );

    let store = FsContentStore::new(dir.path());
    let entries = store.list(&ListQuery::new("notes")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].slug, "2024/june/walk");
}

#[test]
fn non_markdown_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_note(dir.path(), "notes/keep.md", "---\ntitle: Keep\n---\nBody.\n");
    write_note(dir.path(), "notes/skip.txt", "not markdown");
    write_note(dir.path(), "notes/.gitkeep", "");

    let store = FsContentStore::new(dir.path());
    let entries = store.list(&ListQuery::new("notes")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Keep");
}

#[test]
fn file_without_frontmatter_renders_blank_metadata() {
    let dir = TempDir::new().unwrap();
    write_note(dir.path(), "notes/plain.md", "Just a body paragraph.\n");

    let store = FsContentStore::new(dir.path());
    let entries = store.list(&ListQuery::new("notes")).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "");
    assert_eq!(entries[0].date, None);
    assert_eq!(entries[0].body, "Just a body paragraph.\n");
}

#[test]
fn end_to_end_render_produces_display_dates_and_full_bodies() {
    let dir = TempDir::new().unwrap();
    write_note(
        dir.path(),
        "notes/meditation.md",
        "---\ntitle: On Stillness\ndate: 2024-02-29\n---\nSit quietly.\n\nBreathe.\n",
    );

    let view = ListService::new(FsContentStore::new(dir.path()))
        .meditations()
        .unwrap();

    assert_eq!(view.blocks.len(), 1);
    assert_eq!(view.blocks[0].title, "On Stillness");
    assert_eq!(view.blocks[0].date, "February 29, 2024");
    assert_eq!(view.blocks[0].body, "Sit quietly.\n\nBreathe.\n");
}
