//! # Course Routes
//!
//! - `GET /api/courses` → `list_courses` (public)
//! - `POST /api/courses` → `create_course` (admin role claim)

use crate::auth::guards::allow_admin;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use get::list_courses;
use post::create_course;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

pub fn courses_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_courses).merge(post(create_course).route_layer(from_fn(allow_admin))),
    )
}
