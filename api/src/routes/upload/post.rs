use crate::response::{ApiResponse, access_denied, error_occurred, error_response};
use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::MultipartRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::instructor::Model as InstructorModel;
use serde::Serialize;
use util::{state::AppState, storage::StoredFile};

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadedFile {
    pub file: StoredFile,
}

/// A file part held in memory until every precondition has passed.
struct PendingFile {
    original_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

/// POST /api/upload
///
/// Stores one file for an instructor. The instructor guard has already
/// checked `role`; this handler then checks the instructor exists and that a
/// file was sent, and only then writes to the upload directory.
///
/// ### Request Body (Multipart Form Data)
/// - `role` (text, required): must be `instructor`
/// - `instructorId` (text, required): id of a registered instructor
/// - `file` (file, required): exactly one file
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "message": "File uploaded successfully",
///   "file": {
///     "fieldname": "file",
///     "originalname": "notes.pdf",
///     "mimetype": "application/pdf",
///     "destination": "uploads",
///     "filename": "1729252800000-notes.pdf",
///     "path": "uploads/1729252800000-notes.pdf",
///     "size": 1024
///   }
/// }
/// ```
/// - `400 Bad Request` `{ "message": "No file uploaded" }`, or `"Error Occurred"` for a malformed form or id
/// - `403 Forbidden` `{ "message": "Access Denied" }`: role claim is not `instructor`, or no such instructor
pub async fn upload_file(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected upload body");
            return error_occurred();
        }
    };

    let mut instructor_id: Option<String> = None;
    let mut pending: Option<PendingFile> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Malformed multipart body");
                return error_occurred();
            }
        };

        let name = field.name().unwrap_or("").to_owned();
        match name.as_str() {
            "instructorId" => match field.text().await {
                Ok(text) => instructor_id = Some(text),
                Err(e) => {
                    tracing::debug!(error = %e, "Unreadable instructorId field");
                    return error_occurred();
                }
            },
            FILE_FIELD if field.file_name().is_some() => {
                if pending.is_some() {
                    return error_response(
                        StatusCode::BAD_REQUEST,
                        "Only one file may be uploaded per request",
                    );
                }
                let original_name = field.file_name().unwrap_or_default().to_string();
                let mime_type = field
                    .content_type()
                    .map(str::to_owned)
                    .unwrap_or_else(|| {
                        mime_guess::from_path(&original_name)
                            .first_or_octet_stream()
                            .to_string()
                    });
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes.to_vec(),
                    Err(e) => {
                        tracing::debug!(error = %e, "Unreadable file field");
                        return error_occurred();
                    }
                };
                pending = Some(PendingFile {
                    original_name,
                    mime_type,
                    bytes,
                });
            }
            _ => continue,
        }
    }

    let Some(instructor_id) = instructor_id else {
        return access_denied();
    };

    match InstructorModel::find_by_key(app_state.db(), &instructor_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::debug!(%instructor_id, "Upload by unknown instructor");
            return access_denied();
        }
        Err(e) => {
            tracing::warn!(%instructor_id, error = %e, "Instructor lookup failed");
            return error_occurred();
        }
    }

    let Some(pending) = pending else {
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    match app_state
        .storage()
        .store(
            FILE_FIELD,
            &pending.original_name,
            &pending.mime_type,
            &pending.bytes,
        )
        .await
    {
        Ok(file) => {
            tracing::info!(%instructor_id, filename = %file.filename, size = file.size, "File uploaded");
            Json(ApiResponse::success(
                UploadedFile { file },
                "File uploaded successfully",
            ))
            .into_response()
        }
        Err(e) => {
            tracing::error!(%instructor_id, error = %e, "Failed to store upload");
            error_occurred()
        }
    }
}
