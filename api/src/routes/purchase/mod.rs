//! # Purchase Routes
//!
//! - `POST /api/purchase/{course_id}` → `purchase_course` (student role claim)

use crate::auth::guards::allow_student;
use axum::{Router, middleware::from_fn, routing::post};
use post::purchase_course;
use util::state::AppState;

pub mod post;

pub fn purchase_routes() -> Router<AppState> {
    Router::new().route(
        "/{course_id}",
        post(purchase_course).route_layer(from_fn(allow_student)),
    )
}
