use crate::auth::claims::RoleClaim;
use crate::response::{ACCESS_DENIED, ApiResponse, Empty};
use axum::{
    Json,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::role::Role;
use util::config;

type GuardRejection = (StatusCode, Json<ApiResponse<Empty>>);

fn denied() -> GuardRejection {
    (
        StatusCode::FORBIDDEN,
        Json(ApiResponse::error(ACCESS_DENIED)),
    )
}

/// Base role gate that the concrete guards build upon.
///
/// Buffers the body, reads the caller's [`RoleClaim`] from it and rejects
/// with `403 Access Denied` unless the claim is one of `allowed`. On success
/// the request is passed on with its original body.
///
/// Runs before the handler, so a rejected upload never reaches disk.
pub async fn allow_roles(
    req: Request<Body>,
    next: Next,
    allowed: &[Role],
) -> Result<Response, GuardRejection> {
    let (parts, body) = req.into_parts();

    let bytes = to_bytes(body, config::max_upload_bytes())
        .await
        .map_err(|e| {
            tracing::debug!(error = %e, path = %parts.uri.path(), "Could not buffer body for role check");
            (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ApiResponse::error("Payload Too Large")),
            )
        })?;

    let claim = RoleClaim::from_parts(&parts, &bytes).await;

    if !claim.is_any_of(allowed) {
        tracing::debug!(
            path = %parts.uri.path(),
            claimed = ?claim.0,
            ?allowed,
            "Role check failed"
        );
        return Err(denied());
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

/// Admin-only guard.
pub async fn allow_admin(req: Request<Body>, next: Next) -> Result<Response, GuardRejection> {
    allow_roles(req, next, &[Role::Admin]).await
}

/// Student-only guard.
pub async fn allow_student(req: Request<Body>, next: Next) -> Result<Response, GuardRejection> {
    allow_roles(req, next, &[Role::Student]).await
}

/// Instructor-only guard.
pub async fn allow_instructor(req: Request<Body>, next: Next) -> Result<Response, GuardRejection> {
    allow_roles(req, next, &[Role::Instructor]).await
}
