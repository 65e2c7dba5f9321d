use crate::response::{ApiResponse, Empty, access_denied, error_occurred, error_response};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{course::Model as CourseModel, student::Model as StudentModel};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    #[serde(rename = "studentId")]
    pub student_id: Option<String>,
}

/// POST /api/purchase/{course_id}
///
/// Appends the student's id to the course's student list. There is no
/// payment step and no check for an earlier purchase, so buying twice lists
/// the student twice.
///
/// ### Request Body
/// ```json
/// { "role": "student", "studentId": "…" }
/// ```
///
/// ### Responses
/// - `200 OK` `{ "message": "Course C1 purchased successfully by A" }`
/// - `400 Bad Request` `{ "message": "Error Occurred" }`: malformed body or id, or a store failure
/// - `403 Forbidden` `{ "message": "Access Denied" }`: role claim is not `student`, or no such student
/// - `404 Not Found` `{ "message": "Course not found" }`
///
/// The student is looked up before the course, so an unknown student is a
/// 403 whether or not the course exists.
pub async fn purchase_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<String>,
    payload: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Response {
    let db = app_state.db();

    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected purchase body");
            return error_occurred();
        }
    };

    let Some(student_id) = req.student_id else {
        return access_denied();
    };

    let student = match StudentModel::find_by_key(db, &student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            tracing::debug!(%student_id, "Purchase by unknown student");
            return access_denied();
        }
        Err(e) => {
            tracing::warn!(%student_id, error = %e, "Student lookup failed");
            return error_occurred();
        }
    };

    let course = match CourseModel::find_by_key(db, &course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return error_response(StatusCode::NOT_FOUND, "Course not found");
        }
        Err(e) => {
            tracing::warn!(%course_id, error = %e, "Course lookup failed");
            return error_occurred();
        }
    };

    match course.add_student(db, &student.id).await {
        Ok(course) => {
            tracing::info!(
                course_id = %course.id,
                student_id = %student.id,
                enrolled = course.students.len(),
                "Course purchased"
            );
            Json(ApiResponse::<Empty>::success(
                Empty::default(),
                format!(
                    "Course {} purchased successfully by {}",
                    course.course, student.name
                ),
            ))
            .into_response()
        }
        Err(e) => {
            tracing::warn!(%course_id, student_id = %student.id, error = %e, "Failed to save purchase");
            error_occurred()
        }
    }
}
