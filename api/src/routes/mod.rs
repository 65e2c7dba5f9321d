//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/register` → Student, instructor and admin registration (public)
//! - `/courses` → Course listing (public) and creation (admin role claim)
//! - `/purchase` → Course purchase (student role claim)
//! - `/upload` → Instructor file upload (instructor role claim)
//!
//! Uploaded files themselves are served outside `/api`, see [`app`].

use crate::routes::{
    courses::courses_routes, health::health_routes, purchase::purchase_routes,
    register::register_routes, upload::upload_routes,
};
use axum::Router;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
};
use util::state::AppState;

pub mod courses;
pub mod health;
pub mod purchase;
pub mod register;
pub mod upload;

/// Builds the router for every endpoint under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/register", register_routes())
        .nest("/courses", courses_routes())
        .nest("/purchase", purchase_routes())
        .nest("/upload", upload_routes())
        .with_state(app_state)
}

/// The complete application: `/api` routes, `/uploads` static files, and CORS.
///
/// `/uploads/{filename}` serves straight from the upload directory with no
/// role check; anyone who knows a stored filename can fetch it.
pub fn app(app_state: AppState) -> Router {
    let uploads = ServeDir::new(app_state.storage().root());

    Router::new()
        .nest("/api", routes(app_state))
        .nest_service("/uploads", uploads)
        .layer(CorsLayer::very_permissive())
}
