//! Integration tests for the typed endpoint wrappers.
//!
//! A stub backend serves canned JSON in the backend's wire format
//! (camelCase keys, ISO dates); the assertions pin down paths, query
//! strings, payload shapes, and error mapping.

mod common;

use std::collections::HashMap;

use assert_matches::assert_matches;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use reviewer_client::users::UserPayload;
use reviewer_client::ApiError;

use common::client_for;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_users_parses_nested_reviews() {
    let router = Router::new().route(
        "/users",
        get(|| async {
            Json(json!([{
                "id": 1,
                "username": "frozzel",
                "reviews": [{
                    "id": 10,
                    "authorId": 1,
                    "author": "frozzel",
                    "teacher": {
                        "id": 3,
                        "surname": "Ivanov",
                        "name": "Ivan",
                        "patronym": "Ivanovich",
                        "subjects": ["Math"]
                    },
                    "subjectId": 5,
                    "subjectName": "Math",
                    "date": "2024-03-01",
                    "grade": 9,
                    "comment": "great lectures"
                }]
            }]))
        }),
    );
    let api = client_for(router).await;

    let users = api.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "frozzel");
    assert_eq!(users[0].reviews.len(), 1);
    let review = &users[0].reviews[0];
    assert_eq!(review.grade, 9);
    assert_eq!(review.teacher.full_name(), "Ivanov Ivan Ivanovich");
    assert_eq!(review.date.to_string(), "2024-03-01");
}

#[tokio::test]
async fn create_user_sends_camel_case_payload() {
    let router = Router::new().route(
        "/users",
        post(|Json(body): Json<Value>| async move {
            // Echo back what a real backend would persist.
            Json(json!({
                "id": 42,
                "username": body["username"],
                "reviews": []
            }))
        }),
    );
    let api = client_for(router).await;

    let created = api
        .create_user(&UserPayload {
            username: "newbie".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 42);
    assert_eq!(created.username, "newbie");
}

#[tokio::test]
async fn missing_user_maps_to_api_error_with_status() {
    let router = Router::new().route(
        "/users/{id}",
        get(|| async { (StatusCode::NOT_FOUND, "User with id 99 not found") }),
    );
    let api = client_for(router).await;

    let err = api.get_user(99).await.unwrap_err();
    assert_matches!(err, ApiError::Api { status: 404, ref body } if body.contains("not found"));
}

#[tokio::test]
async fn delete_user_accepts_empty_success_body() {
    let router = Router::new().route("/users/{id}", delete(|| async { StatusCode::NO_CONTENT }));
    let api = client_for(router).await;

    api.delete_user(7).await.unwrap();
}

// ---------------------------------------------------------------------------
// Teachers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_teacher_by_full_name_sends_query_params() {
    let router = Router::new().route(
        "/teachers/search/by-fullname",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params["surname"], "Ivanov");
            assert_eq!(params["name"], "Ivan");
            Json(json!({
                "id": 3,
                "surname": "Ivanov",
                "name": "Ivan",
                "patronym": null,
                "subjects": []
            }))
        }),
    );
    let api = client_for(router).await;

    let teacher = api.find_teacher_by_full_name("Ivanov", "Ivan").await.unwrap();
    assert_eq!(teacher.id, 3);
    assert_eq!(teacher.patronym, None);
}

#[tokio::test]
async fn assign_subject_hits_the_nested_route() {
    let router = Router::new().route(
        "/teachers/{teacher_id}/subjects/{subject_id}",
        post(|Path((teacher_id, subject_id)): Path<(i32, i32)>| async move {
            assert_eq!((teacher_id, subject_id), (3, 5));
            StatusCode::OK
        }),
    );
    let api = client_for(router).await;

    api.assign_subject_to_teacher(3, 5).await.unwrap();
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn recent_reviews_passes_the_limit() {
    let router = Router::new().route(
        "/reviews/recent",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params["limit"], "5");
            Json(json!([]))
        }),
    );
    let api = client_for(router).await;

    let reviews = api.recent_reviews(5).await.unwrap();
    assert!(reviews.is_empty());
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn visit_counts_parse_as_a_map() {
    let router = Router::new().route(
        "/metrics/visits/by-url",
        get(|| async { Json(json!({"/users": 17, "/teachers/{id}": 4})) }),
    );
    let api = client_for(router).await;

    let counts = api.url_visit_counts().await.unwrap();
    assert_eq!(counts["/users"], 17);
    assert_eq!(counts["/teachers/{id}"], 4);
}
