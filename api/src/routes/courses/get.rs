use crate::response::error_occurred;
use crate::routes::courses::common::CourseResponse;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use util::state::AppState;

/// GET /api/courses
///
/// Returns every course as a bare JSON array, oldest first. No paging,
/// filtering or projection; any caller may list.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// [
///   {
///     "id": "…",
///     "course": "C1",
///     "description": null,
///     "price": 10.0,
///     "students": ["…", "…"],
///     "instructor": null,
///     "created_at": "2024-10-18T12:00:00+00:00"
///   }
/// ]
/// ```
/// - `400 Bad Request` `{ "message": "Error Occurred" }` on a store failure
pub async fn list_courses(State(app_state): State<AppState>) -> Response {
    match CourseModel::list_all(app_state.db()).await {
        Ok(courses) => {
            let body: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();
            Json(body).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to list courses");
            error_occurred()
        }
    }
}
