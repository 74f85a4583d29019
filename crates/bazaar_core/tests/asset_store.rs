use bazaar_core::{AssetError, AssetStore, DEFAULT_ASSET_NAME};
use std::fs;

#[test]
fn store_returns_hash_derived_reference() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path()).unwrap();

    let name = store.store(b"camera photo bytes").unwrap();
    assert!(name.ends_with(".jpg"));
    assert_eq!(name.len(), 64 + ".jpg".len());
    assert!(dir.path().join(&name).is_file());
}

#[test]
fn storing_identical_bytes_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path()).unwrap();

    let first = store.store(b"same content").unwrap();
    let second = store.store(b"same content").unwrap();

    assert_eq!(first, second);
    assert_eq!(store.resolve(&first).unwrap(), b"same content");
}

#[test]
fn distinct_bytes_get_distinct_references() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path()).unwrap();

    let a = store.store(b"content a").unwrap();
    let b = store.store(b"content b").unwrap();
    assert_ne!(a, b);
}

#[test]
fn resolve_roundtrips_stored_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path()).unwrap();

    let content = b"\xff\xd8\xff\xe0 fake jpeg".to_vec();
    let name = store.store(&content).unwrap();
    assert_eq!(store.resolve(&name).unwrap(), content);
}

#[test]
fn resolve_of_missing_asset_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path()).unwrap();
    fs::write(dir.path().join(DEFAULT_ASSET_NAME), b"placeholder").unwrap();

    let bytes = store
        .resolve("0000000000000000000000000000000000000000000000000000000000000000.jpg")
        .unwrap();
    assert_eq!(bytes, b"placeholder");
}

#[test]
fn resolve_fails_when_default_asset_is_also_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path()).unwrap();

    let err = store.resolve("never-stored.jpg").unwrap_err();
    assert!(matches!(err, AssetError::Io { .. }));
}

#[test]
fn resolve_rejects_references_without_jpg_extension() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path()).unwrap();
    // Rejection is about the reference shape, not file existence.
    fs::write(dir.path().join("present.png"), b"png bytes").unwrap();

    for bad in ["present.png", "noext", ".jpg", ""] {
        let err = store.resolve(bad).unwrap_err();
        assert!(matches!(err, AssetError::InvalidReference { .. }), "{bad}");
    }
}

#[test]
fn resolve_rejects_path_traversal_references() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path()).unwrap();

    for bad in ["../escape.jpg", "sub/dir.jpg", "a\\b.jpg"] {
        let err = store.resolve(bad).unwrap_err();
        assert!(matches!(err, AssetError::InvalidReference { .. }), "{bad}");
    }
}
