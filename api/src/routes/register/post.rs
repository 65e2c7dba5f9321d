use crate::response::{ApiResponse, error_occurred};
use crate::routes::register::common::{RegisterRequest, RegisteredUser};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use db::models::{admin, instructor, role::Role, student};
use sea_orm::DatabaseConnection;
use util::state::AppState;
use validator::Validate;

/// POST /api/register/student
///
/// ### Request Body
/// ```json
/// { "name": "A", "email": "a@x.com", "password": "p", "phone": 1 }
/// ```
///
/// ### Responses
/// - `200 OK` `{ "message": "Student Registered Successfully", "userId": "…" }`
/// - `400 Bad Request` `{ "message": "Error Occurred" }` on malformed body, a missing field, or a store failure
pub async fn register_student(
    State(app_state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    register(app_state.db(), Role::Student, payload).await
}

/// POST /api/register/instructor
///
/// Same contract as [`register_student`], stored as an instructor.
pub async fn register_instructor(
    State(app_state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    register(app_state.db(), Role::Instructor, payload).await
}

/// POST /api/register/admin
///
/// Same contract as [`register_student`], stored as an admin.
pub async fn register_admin(
    State(app_state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    register(app_state.db(), Role::Admin, payload).await
}

async fn register(
    db: &DatabaseConnection,
    role: Role,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(%role, error = %rejection, "Rejected registration body");
            return error_occurred();
        }
    };

    if let Err(e) = req.validate() {
        tracing::debug!(%role, error = %e, "Registration validation failed");
        return error_occurred();
    }

    let account = req.into_account();
    let created = match role {
        Role::Student => student::Model::create(db, account).await.map(|m| m.id),
        Role::Instructor => instructor::Model::create(db, account).await.map(|m| m.id),
        Role::Admin => admin::Model::create(db, account).await.map(|m| m.id),
    };

    match created {
        Ok(user_id) => {
            tracing::info!(%role, %user_id, "Account registered");
            Json(ApiResponse::success(
                RegisteredUser { user_id },
                format!("{} Registered Successfully", role.title()),
            ))
            .into_response()
        }
        Err(e) => {
            tracing::warn!(%role, error = %e, "Failed to register account");
            error_occurred()
        }
    }
}
