//! # Upload Routes
//!
//! - `POST /api/upload` → `upload_file` (instructor role claim, multipart)
//!
//! Stored files are served back from `/uploads/{filename}`.

use crate::auth::guards::allow_instructor;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::post,
};
use post::upload_file;
use util::{config, state::AppState};

pub mod post;

pub fn upload_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        post(upload_file)
            .route_layer(from_fn(allow_instructor))
            .layer(DefaultBodyLimit::max(config::max_upload_bytes())),
    )
}
