//! Application state container shared across Axum route handlers.
//!
//! Holds the store connection and the upload storage. Handlers receive it
//! through Axum's `State<AppState>` extractor instead of reaching for globals.

use crate::storage::FileStorage;
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    storage: FileStorage,
}

impl AppState {
    /// Creates a new `AppState` from a connected store and an upload storage.
    pub fn new(db: DatabaseConnection, storage: FileStorage) -> Self {
        Self { db, storage }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn storage(&self) -> &FileStorage {
        &self.storage
    }
}
