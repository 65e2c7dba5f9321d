//! # Registration Routes
//!
//! - `POST /api/register/student`
//! - `POST /api/register/instructor`
//! - `POST /api/register/admin`
//!
//! All public. Each stores a new account in its own collection with that
//! collection's fixed role; a `role` in the body is ignored.

use axum::{Router, routing::post};
use post::{register_admin, register_instructor, register_student};
use util::state::AppState;

pub mod common;
pub mod post;

pub fn register_routes() -> Router<AppState> {
    Router::new()
        .route("/student", post(register_student))
        .route("/instructor", post(register_instructor))
        .route("/admin", post(register_admin))
}
