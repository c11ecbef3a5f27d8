//! File-backed geometry persistence round-trips.

use overtoc_panel::{FileStore, GeometryStore, PositionRecord, Side, StringStore};

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("geometry.json");

    let mut store = GeometryStore::new(FileStore::new(&path));
    let record = PositionRecord {
        side: Side::Left,
        top: Some("128px".to_owned()),
        collapsed: true,
    };
    store.save(&record);

    // A fresh store over the same path sees the same record.
    let reloaded = GeometryStore::new(FileStore::new(&path));
    assert_eq!(reloaded.load(), record);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = GeometryStore::new(FileStore::new(dir.path().join("nope.json")));
    assert_eq!(store.load(), PositionRecord::default());
}

#[test]
fn garbage_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("geometry.json");
    let mut raw = FileStore::new(&path);
    raw.set("\u{1}\u{2} not json").expect("write");
    let store = GeometryStore::new(raw);
    assert_eq!(store.load(), PositionRecord::default());
}
