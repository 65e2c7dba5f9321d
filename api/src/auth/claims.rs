use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Multipart},
    http::{Request, header::CONTENT_TYPE, request::Parts},
};
use db::models::role::Role;
use serde::Deserialize;
use std::str::FromStr;

/// The role a caller asserts for itself, read from the request body.
///
/// `RoleClaim(None)` means no usable claim: the field was missing, was not a
/// string, named an unknown role, or the body could not be parsed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleClaim(pub Option<Role>);

#[derive(Deserialize)]
struct JsonRole {
    role: Option<String>,
}

impl RoleClaim {
    /// Reads the `role` field from a request's buffered body.
    ///
    /// JSON bodies are read as an object with a string `role` field.
    /// `multipart/form-data` bodies are scanned for a text part named `role`;
    /// other parts (including files) are read into memory and discarded,
    /// never written anywhere. Any other content type carries no claim.
    pub async fn from_parts(parts: &Parts, body: &Bytes) -> Self {
        let Some(content_type) = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        else {
            return RoleClaim(None);
        };

        let raw = if content_type.starts_with("multipart/form-data") {
            multipart_role(parts, body).await
        } else if content_type.contains("json") {
            serde_json::from_slice::<JsonRole>(body)
                .ok()
                .and_then(|b| b.role)
        } else {
            None
        };

        RoleClaim(raw.and_then(|r| Role::from_str(&r).ok()))
    }

    /// True if a claim is present and is one of `allowed`.
    pub fn is_any_of(&self, allowed: &[Role]) -> bool {
        self.0.is_some_and(|role| allowed.contains(&role))
    }
}

/// Parses a copy of the request so route-level settings such as
/// `DefaultBodyLimit` still apply.
async fn multipart_role(parts: &Parts, body: &Bytes) -> Option<String> {
    let mut req = Request::new(Body::from(body.clone()));
    *req.headers_mut() = parts.headers.clone();
    *req.extensions_mut() = parts.extensions.clone();
    let mut multipart = Multipart::from_request(req, &()).await.ok()?;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("role") && field.file_name().is_none() {
            return field.text().await.ok();
        }
    }
    None
}
