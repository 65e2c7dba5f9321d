#[cfg(test)]
mod tests {
    use crate::helpers::{
        make_test_app,
        requests::{create_course, get_request, json_request, register, send},
    };
    use axum::http::StatusCode;
    use db::models::{course, key::new_key};
    use serde_json::json;

    fn purchase(student_id: &str) -> serde_json::Value {
        json!({ "role": "student", "studentId": student_id })
    }

    #[tokio::test]
    async fn student_purchases_course() {
        let (app, state, _tmp) = make_test_app().await;
        let student_id = register(&app, "student", "A").await;
        let course_id = create_course(&app, "C1", 10.0).await;

        let (status, json) = send(
            &app,
            json_request("POST", &format!("/api/purchase/{course_id}"), &purchase(&student_id)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({ "message": "Course C1 purchased successfully by A" })
        );

        let stored = course::Model::find_by_key(state.db(), &course_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.students.0, vec![student_id.clone()]);

        let (_, listing) = send(&app, get_request("/api/courses")).await;
        assert_eq!(listing[0]["students"], json!([student_id]));
    }

    #[tokio::test]
    async fn repeat_purchase_is_recorded_twice() {
        let (app, state, _tmp) = make_test_app().await;
        let student_id = register(&app, "student", "A").await;
        let course_id = create_course(&app, "C1", 10.0).await;
        let uri = format!("/api/purchase/{course_id}");

        for _ in 0..2 {
            let (status, _) = send(&app, json_request("POST", &uri, &purchase(&student_id))).await;
            assert_eq!(status, StatusCode::OK);
        }

        let stored = course::Model::find_by_key(state.db(), &course_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.students.0, vec![student_id.clone(), student_id]);
    }

    #[tokio::test]
    async fn concurrent_purchases_by_different_students_all_land() {
        let (app, state, _tmp) = make_test_app().await;
        let course_id = create_course(&app, "C1", 10.0).await;
        let mut student_ids = Vec::new();
        for i in 0..10 {
            student_ids.push(register(&app, "student", &format!("S{i}")).await);
        }

        let mut tasks = tokio::task::JoinSet::new();
        for student_id in student_ids.clone() {
            let app = app.clone();
            let uri = format!("/api/purchase/{course_id}");
            tasks.spawn(async move {
                send(&app, json_request("POST", &uri, &purchase(&student_id))).await.0
            });
        }
        while let Some(status) = tasks.join_next().await {
            assert_eq!(status.unwrap(), StatusCode::OK);
        }

        let stored = course::Model::find_by_key(state.db(), &course_id)
            .await
            .unwrap()
            .unwrap();
        let mut enrolled = stored.students.0.clone();
        enrolled.sort();
        student_ids.sort();
        assert_eq!(enrolled, student_ids);
    }

    #[tokio::test]
    async fn other_roles_are_denied() {
        let (app, state, _tmp) = make_test_app().await;
        let student_id = register(&app, "student", "A").await;
        let course_id = create_course(&app, "C1", 10.0).await;
        let uri = format!("/api/purchase/{course_id}");

        for role in [json!("admin"), json!("instructor"), json!(null)] {
            let body = json!({ "role": role, "studentId": student_id });
            let (status, json) = send(&app, json_request("POST", &uri, &body)).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(json["message"], "Access Denied");
        }

        let stored = course::Model::find_by_key(state.db(), &course_id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.students.is_empty());
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let (app, _state, _tmp) = make_test_app().await;
        let student_id = register(&app, "student", "A").await;

        let (status, json) = send(
            &app,
            json_request("POST", &format!("/api/purchase/{}", new_key()), &purchase(&student_id)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "message": "Course not found" }));
    }

    #[tokio::test]
    async fn unknown_student_is_denied_before_course_lookup() {
        let (app, _state, _tmp) = make_test_app().await;
        let course_id = create_course(&app, "C1", 10.0).await;

        // Existing course.
        let (status, json) = send(
            &app,
            json_request("POST", &format!("/api/purchase/{course_id}"), &purchase(&new_key())),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["message"], "Access Denied");

        // Missing course as well: still 403, not 404.
        let (status, _) = send(
            &app,
            json_request("POST", &format!("/api/purchase/{}", new_key()), &purchase(&new_key())),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn instructor_id_is_not_a_student() {
        let (app, _state, _tmp) = make_test_app().await;
        let instructor_id = register(&app, "instructor", "I").await;
        let course_id = create_course(&app, "C1", 10.0).await;

        let (status, _) = send(
            &app,
            json_request("POST", &format!("/api/purchase/{course_id}"), &purchase(&instructor_id)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn missing_student_id_is_denied() {
        let (app, _state, _tmp) = make_test_app().await;
        let course_id = create_course(&app, "C1", 10.0).await;

        let (status, _) = send(
            &app,
            json_request(
                "POST",
                &format!("/api/purchase/{course_id}"),
                &json!({ "role": "student" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn malformed_ids_are_bad_requests() {
        let (app, _state, _tmp) = make_test_app().await;
        let student_id = register(&app, "student", "A").await;
        let course_id = create_course(&app, "C1", 10.0).await;

        let (status, json) = send(
            &app,
            json_request("POST", &format!("/api/purchase/{course_id}"), &purchase("not-an-id")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Error Occurred");

        let (status, _) = send(
            &app,
            json_request("POST", "/api/purchase/not-an-id", &purchase(&student_id)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
