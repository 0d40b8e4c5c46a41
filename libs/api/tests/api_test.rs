use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use entity::prelude::*;
use repository::{init_repository_with, Repository};
use sea_orm::ConnectOptions;
use serde_json::{json, Value};
use tower::ServiceExt;

const EVENT_ID: &str = "99713657-03a8-4c9f-831d-4cca180cb367";

async fn setup(maximum_attendees: Option<i32>) -> (Router, Repository) {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1);

    let repository = init_repository_with(opt).await.unwrap();
    repository
        .event
        .save(EventEntity {
            id: EVENT_ID.to_string(),
            title: "Unite Summit".to_string(),
            slug: "unite-summit".to_string(),
            details: Some("An event for developers".to_string()),
            maximum_attendees,
        })
        .await
        .unwrap();

    let config = api::Config {
        port: 0,
        allowed_origins: vec!["http://localhost:3000".to_string()],
    };
    let router = api::app(repository.clone(), &config).unwrap();

    (router, repository)
}

fn register(event_id: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/events/{event_id}/attendees"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(id: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/attendees/{id}"))
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_register_until_event_is_full() {
    // Arrange
    let (router, _) = setup(Some(1)).await;

    // Act
    let first = router
        .clone()
        .oneshot(register(
            EVENT_ID,
            json!({ "name": "Ana Souza", "email": "ana@x.com" }),
        ))
        .await
        .unwrap();
    let second = router
        .oneshot(register(
            EVENT_ID,
            json!({ "name": "Bea Lima", "email": "bea@x.com" }),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(first.status(), StatusCode::ACCEPTED);
    assert_eq!(json_body(first).await, json!({ "attendeeId": 1 }));
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(second).await,
        json!({
            "message": "The maximum number of attendees has been reached for this event."
        })
    );
}

#[tokio::test]
async fn test_register_same_email_twice() {
    // Arrange
    let (router, repository) = setup(None).await;
    let body = json!({ "name": "Ana Souza", "email": "ana@x.com" });

    // Act
    let first = router
        .clone()
        .oneshot(register(EVENT_ID, body.clone()))
        .await
        .unwrap();
    let second = router.oneshot(register(EVENT_ID, body)).await.unwrap();

    // Assert
    assert_eq!(first.status(), StatusCode::ACCEPTED);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(second).await["message"],
        "This e-mail is already registered for this event"
    );
    assert!(repository
        .attendee
        .find_by_email_and_event("ana@x.com", EVENT_ID)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    // Arrange
    let (router, repository) = setup(None).await;

    // Act
    let response = router
        .oneshot(register(EVENT_ID, json!({ "name": "Ana", "email": "ana" })))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Error during validation");
    let fields: Vec<_> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, ["name", "email"]);
    assert_eq!(repository.attendee.count_by_event(EVENT_ID).await.unwrap(), 0);
}

#[tokio::test]
async fn test_register_rejects_invalid_event_id() {
    // Arrange
    let (router, _) = setup(None).await;

    // Act
    let response = router
        .oneshot(register(
            "not-a-uuid",
            json!({ "name": "Ana Souza", "email": "ana@x.com" }),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["errors"],
        json!([{ "field": "eventId", "reason": "Invalid uuid" }])
    );
}

#[tokio::test]
async fn test_register_for_unknown_event() {
    // Arrange
    let (router, _) = setup(None).await;

    // Act
    let response = router
        .oneshot(register(
            "0f2b9d9e-5a4c-4e0b-9d43-1d6f3c8e7a10",
            json!({ "name": "Ana Souza", "email": "ana@x.com" }),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "Event not found.");
}

#[tokio::test]
async fn test_delete_attendee() {
    // Arrange
    let (router, repository) = setup(None).await;
    let registered = router
        .clone()
        .oneshot(register(
            EVENT_ID,
            json!({ "name": "Ana Souza", "email": "ana@x.com" }),
        ))
        .await
        .unwrap();
    let attendee_id = json_body(registered).await["attendeeId"]
        .as_i64()
        .unwrap();

    // Act
    let deleted = router
        .clone()
        .oneshot(delete(&attendee_id.to_string()))
        .await
        .unwrap();
    let again = router
        .oneshot(delete(&attendee_id.to_string()))
        .await
        .unwrap();

    // Assert
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(deleted.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
    assert_eq!(again.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(again).await["message"], "Attendee not found.");
    assert!(repository
        .attendee
        .find_by_id(attendee_id as i32)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_rejects_non_integer_id() {
    // Arrange
    let (router, _) = setup(None).await;

    // Act
    let response = router.oneshot(delete("abc")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["errors"][0]["field"],
        "id"
    );
}

#[tokio::test]
async fn test_healthz_and_fallback() {
    // Arrange
    let (router, _) = setup(None).await;
    let request = |uri: &str| {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    };

    // Act
    let health = router.clone().oneshot(request("/healthz")).await.unwrap();
    let missing = router.oneshot(request("/nowhere")).await.unwrap();

    // Assert
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_lists_attendee_routes() {
    // Arrange
    let (router, _) = setup(None).await;
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    // Act
    let response = router.oneshot(request).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let document = json_body(response).await;
    let paths = document["paths"].as_object().unwrap();
    assert!(paths.contains_key("/events/{eventId}/attendees"));
    assert!(paths.contains_key("/attendees/{id}"));
    assert!(document["paths"]["/events/{eventId}/attendees"]["post"]["responses"]
        .get("202")
        .is_some());
}
