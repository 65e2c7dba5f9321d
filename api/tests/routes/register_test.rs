#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app,
        requests::{json_request, send},
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::{admin, instructor, role::Role, student};
    use serde_json::json;

    fn account(name: &str) -> serde_json::Value {
        json!({ "name": name, "email": "a@x.com", "password": "p", "phone": 1 })
    }

    #[tokio::test]
    async fn register_student_returns_id_of_stored_student() {
        let (app, state, _tmp) = make_test_app().await;

        let (status, json) = send(
            &app,
            json_request("POST", "/api/register/student", &account("A")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Student Registered Successfully");

        let id = json["userId"].as_str().unwrap();
        let stored = student::Model::find_by_key(state.db(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "A");
        assert_eq!(stored.email, "a@x.com");
        assert_eq!(stored.phone, 1.0);
        assert_eq!(stored.role, Role::Student);
    }

    #[tokio::test]
    async fn each_kind_lands_in_its_own_collection() {
        let (app, state, _tmp) = make_test_app().await;

        let (status, json) = send(
            &app,
            json_request("POST", "/api/register/instructor", &account("I")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Instructor Registered Successfully");
        let instructor_id = json["userId"].as_str().unwrap().to_string();

        let (status, json) = send(
            &app,
            json_request("POST", "/api/register/admin", &account("Z")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Admin Registered Successfully");
        let admin_id = json["userId"].as_str().unwrap().to_string();

        let db = state.db();
        assert!(instructor::Model::find_by_key(db, &instructor_id).await.unwrap().is_some());
        assert!(student::Model::find_by_key(db, &instructor_id).await.unwrap().is_none());
        assert!(admin::Model::find_by_key(db, &admin_id).await.unwrap().is_some());
        assert!(instructor::Model::find_by_key(db, &admin_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn role_in_body_is_ignored() {
        let (app, state, _tmp) = make_test_app().await;

        let mut body = account("A");
        body["role"] = json!("admin");
        let (status, json) = send(&app, json_request("POST", "/api/register/student", &body)).await;
        assert_eq!(status, StatusCode::OK);

        let id = json["userId"].as_str().unwrap();
        let stored = student::Model::find_by_key(state.db(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.role, Role::Student);
        assert!(admin::Model::find_by_key(state.db(), id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_emails_are_accepted() {
        let (app, _state, _tmp) = make_test_app().await;

        let (first, a) = send(&app, json_request("POST", "/api/register/student", &account("A"))).await;
        let (second, b) = send(&app, json_request("POST", "/api/register/student", &account("B"))).await;
        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::OK);
        assert_ne!(a["userId"], b["userId"]);
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let (app, _state, _tmp) = make_test_app().await;

        for field in ["name", "email", "password", "phone"] {
            let mut body = account("A");
            body.as_object_mut().unwrap().remove(field);

            let (status, json) = send(&app, json_request("POST", "/api/register/admin", &body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
            assert_eq!(json, json!({ "message": "Error Occurred" }));
        }
    }

    #[tokio::test]
    async fn numeric_phone_strings_are_cast() {
        let (app, state, _tmp) = make_test_app().await;

        let mut body = account("A");
        body["phone"] = json!("5550100");
        let (status, json) = send(&app, json_request("POST", "/api/register/student", &body)).await;
        assert_eq!(status, StatusCode::OK);

        let id = json["userId"].as_str().unwrap();
        let stored = student::Model::find_by_key(state.db(), id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.phone, 5550100.0);
    }

    #[tokio::test]
    async fn non_numeric_phone_is_rejected() {
        let (app, _state, _tmp) = make_test_app().await;

        let mut body = account("A");
        body["phone"] = json!("call me");
        let (status, json) = send(&app, json_request("POST", "/api/register/student", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Error Occurred");
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let (app, _state, _tmp) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/register/student")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let (status, json) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Error Occurred");
    }
}
