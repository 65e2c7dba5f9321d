use crate::response::ApiResponse;
use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;
use util::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint for uptime checks.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /api/health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "message": "Health check passed", "status": "OK" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success(
        HealthStatus { status: "OK" },
        "Health check passed",
    ))
}
