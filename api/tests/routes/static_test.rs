#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app,
        requests::{get_request, multipart_body, multipart_request, register, send},
    };
    use axum::{body::to_bytes, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn uploaded_file_is_served_from_uploads() {
        let (app, _state, _tmp) = make_test_app().await;
        let instructor_id = register(&app, "instructor", "I").await;

        let body = multipart_body(
            &[("role", "instructor"), ("instructorId", instructor_id.as_str())],
            Some(("notes.txt", "lecture notes")),
        );
        let (status, json) = send(&app, multipart_request("/api/upload", body)).await;
        assert_eq!(status, StatusCode::OK);
        let filename = json["file"]["filename"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(get_request(&format!("/uploads/{filename}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"lecture notes");
    }

    #[tokio::test]
    async fn unknown_file_is_not_found() {
        let (app, _state, _tmp) = make_test_app().await;

        let response = app
            .oneshot(get_request("/uploads/0-missing.txt"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
