use crate::response::{ApiResponse, Empty, error_occurred};
use crate::routes::courses::common::CreateCourseRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use db::models::course::Model as CourseModel;
use util::state::AppState;
use validator::Validate;

/// POST /api/courses
///
/// Creates a course with no students and no instructor. Requires `"role": "admin"`
/// in the body (checked by `allow_admin`). The new course's id is not returned.
///
/// ### Request Body
/// ```json
/// { "role": "admin", "course": "C1", "description": "Intro", "price": 10 }
/// ```
///
/// ### Responses
/// - `200 OK` `{ "message": "Course Created Successfully" }`
/// - `400 Bad Request` `{ "message": "Error Occurred" }`
/// - `403 Forbidden` `{ "message": "Access Denied" }` (from the guard)
pub async fn create_course(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected course body");
            return error_occurred();
        }
    };

    if let Err(e) = req.validate() {
        tracing::debug!(error = %e, "Course validation failed");
        return error_occurred();
    }

    match CourseModel::create(app_state.db(), req.into_new_course()).await {
        Ok(course) => {
            tracing::info!(course_id = %course.id, name = %course.course, "Course created");
            Json(ApiResponse::<Empty>::success(
                Empty::default(),
                "Course Created Successfully",
            ))
            .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create course");
            error_occurred()
        }
    }
}
