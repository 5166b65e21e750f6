mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{lan_finals, parse_body, TestApp};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_home_banner() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/").body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<h1>Event Service REST API</h1>");
}

#[tokio::test]
async fn test_health_reports_event_count() {
    let app = TestApp::new().await;

    let (status, body) = app.request(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "events": 0}));

    app.request(Method::POST, "/events", Some(lan_finals())).await;

    let (_, body) = app.request(Method::GET, "/health", None).await;
    assert_eq!(body["events"], 1);
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = TestApp::new().await;

    let (status, body) = app.request(Method::GET, "/events", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_delete_scenario() {
    let app = TestApp::new().await;

    // 1. Create
    let (status, body) = app.request(Method::POST, "/events", Some(lan_finals())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!([{
        "id": 1,
        "name": "LAN Finals",
        "date": "2024-05-01",
        "type": "Tournament",
        "game": "Chess",
        "description": "Championship"
    }]));

    // 2. Delete returns the remaining collection
    let (status, body) = app.request(Method::DELETE, "/events/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // 3. Gone
    let (status, body) = app.request(Method::GET, "/events/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Event not Found");
}

#[tokio::test]
async fn test_post_returns_full_collection_and_get_roundtrips() {
    let app = TestApp::new().await;

    app.request(Method::POST, "/events", Some(lan_finals())).await;
    let second = json!({
        "name": "Spring Cup",
        "date": "2024-06-12",
        "type": "League",
        "game": "Go",
        "description": "Round robin"
    });
    let (status, body) = app.request(Method::POST, "/events", Some(second.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "LAN Finals");
    assert_eq!(list[1]["name"], "Spring Cup");

    let id = list[1]["id"].as_i64().unwrap();
    let (status, event) = app.request(Method::GET, &format!("/events/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["id"], id);
    for key in ["name", "date", "type", "game", "description"] {
        assert_eq!(event[key], second[key], "field {} mismatch", key);
    }
    assert_eq!(event.as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_patch_replaces_every_field() {
    let app = TestApp::new().await;
    app.request(Method::POST, "/events", Some(lan_finals())).await;

    let replacement = json!({
        "name": "Autumn Open",
        "date": "2024-10-02",
        "type": "Open",
        "game": "Checkers",
        "description": "Swiss system"
    });
    let (status, body) = app.request(Method::PATCH, "/events/1", Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    for key in ["name", "date", "type", "game", "description"] {
        assert_eq!(body[key], replacement[key]);
        assert_ne!(body[key], lan_finals()[key]);
    }

    let (_, stored) = app.request(Method::GET, "/events/1", None).await;
    assert_eq!(stored, body);
    assert_eq!(app.count().await, 1);
}

#[tokio::test]
async fn test_delete_keeps_other_events() {
    let app = TestApp::new().await;
    app.request(Method::POST, "/events", Some(lan_finals())).await;
    app.request(Method::POST, "/events", Some(lan_finals())).await;
    app.request(Method::POST, "/events", Some(lan_finals())).await;

    let (status, body) = app.request(Method::DELETE, "/events/2", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|e| e["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = TestApp::new().await;
    app.request(Method::POST, "/events", Some(lan_finals())).await;
    app.request(Method::DELETE, "/events/1", None).await;

    let (_, body) = app.request(Method::POST, "/events", Some(lan_finals())).await;
    assert_eq!(body[0]["id"], 2);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = TestApp::new().await;

    for (method, body) in [
        (Method::GET, None),
        (Method::PATCH, Some(lan_finals())),
        (Method::DELETE, None),
    ] {
        let (status, resp) = app.request(method.clone(), "/events/42", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} /events/42", method);
        assert_eq!(resp, json!({"error": "Event not Found"}));
    }
}

#[tokio::test]
async fn test_non_integer_id_is_not_found() {
    let app = TestApp::new().await;
    app.request(Method::POST, "/events", Some(lan_finals())).await;

    let (status, body) = app.request(Method::GET, "/events/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Event not Found");

    let (status, _) = app.request(Method::DELETE, "/events/1.5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.count().await, 1);
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app.request(Method::PUT, "/events/1", Some(lan_finals())).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = app.request(Method::DELETE, "/events", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
