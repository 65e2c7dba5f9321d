use crate::storage::FileStorage;
use tempfile::TempDir;

/// Creates a unique temporary upload directory and a `FileStorage` rooted in it.
///
/// Keep the returned `TempDir` in scope for as long as you need the files;
/// the directory is removed when it is dropped.
pub fn setup_test_storage() -> (FileStorage, TempDir) {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let abs = tmp
        .path()
        .canonicalize()
        .unwrap_or_else(|_| tmp.path().to_path_buf());
    (FileStorage::new(abs.join("uploads")), tmp)
}
