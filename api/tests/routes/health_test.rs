#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app,
        requests::{get_request, send},
    };
    use axum::http::StatusCode;

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let (app, _state, _tmp) = make_test_app().await;

        let (status, json) = send(&app, get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Health check passed");
        assert_eq!(json["status"], "OK");
    }
}
