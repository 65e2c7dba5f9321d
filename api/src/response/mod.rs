use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Fixed body for role-gate rejections and unknown acting accounts.
pub const ACCESS_DENIED: &str = "Access Denied";

/// Fixed body for any validation or persistence failure. Deliberately carries no detail.
pub const ERROR_OCCURRED: &str = "Error Occurred";

/// Standardized API response wrapper for outgoing JSON objects.
///
/// Every object response carries a human-readable `message`; the fields of
/// `data` are flattened next to it:
/// ```json
/// { "message": "Student Registered Successfully", "userId": "…" }
/// ```
///
/// Error responses use [`Empty`] as `data`, leaving just the message:
/// ```json
/// { "message": "Access Denied" }
/// ```
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            message: message.into(),
            data: T::default(),
        }
    }
}

/// No extra fields.
#[derive(Serialize, Default, Debug)]
pub struct Empty {}

/// `(status, {"message": …})` as a ready response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<Empty>::error(message))).into_response()
}

/// 400 with the generic failure message.
pub fn error_occurred() -> Response {
    error_response(StatusCode::BAD_REQUEST, ERROR_OCCURRED)
}

/// 403 with the generic denial message.
pub fn access_denied() -> Response {
    error_response(StatusCode::FORBIDDEN, ACCESS_DENIED)
}
