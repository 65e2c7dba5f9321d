use api::routes::app;
use axum::Router;
use db::test_utils::setup_test_db;
use tempfile::TempDir;
use util::{state::AppState, test_helpers::setup_test_storage};

/// Full application over a fresh in-memory store and a temporary upload directory.
///
/// Hold on to the returned `TempDir`; dropping it removes the uploads.
pub async fn make_test_app() -> (Router, AppState, TempDir) {
    let db = setup_test_db().await;
    let (storage, tmp) = setup_test_storage();
    let app_state = AppState::new(db, storage);

    (app(app_state.clone()), app_state, tmp)
}
