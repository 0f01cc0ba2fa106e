//! RSVP API integration tests
//!
//! Exercises the assembled router (all middleware, in-memory database)
//! through `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tower::ServiceExt;

use debut_server::core::server::build_app;
use debut_server::core::{Config, ServerState};
use debut_server::db::repository::RsvpRepository;

async fn test_app() -> (Router, Surreal<Db>) {
    let config = Config::with_overrides("unused", 0);
    let state = ServerState::initialize_in_memory(&config).await;
    let db = state.get_db();
    (build_app(state), db)
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_rsvp(app: &Router, payload: Value) -> (StatusCode, Value) {
    let request = Request::post("/api/rsvp")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn valid_payload() -> Value {
    json!({
        "guestName": "Maria Clara",
        "email": "maria@example.com",
        "attending": "yes",
        "guestCount": 2,
        "mealPreference": "Vegetarian",
        "message": "Congratulations!",
    })
}

fn detail_fields(body: &Value) -> Vec<&str> {
    body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect()
}

// ========== Submission ==========

#[tokio::test]
async fn valid_submission_returns_created_record() {
    let (app, _db) = test_app().await;

    let (status, body) = post_rsvp(&app, valid_payload()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let rsvp = &body["rsvp"];
    assert_eq!(rsvp["guestName"], "Maria Clara");
    assert_eq!(rsvp["email"], "maria@example.com");
    assert_eq!(rsvp["attending"], "yes");
    assert_eq!(rsvp["guestCount"], 2);
    assert_eq!(rsvp["mealPreference"], "Vegetarian");
    assert_eq!(rsvp["message"], "Congratulations!");
    assert!(rsvp["id"].as_str().unwrap().starts_with("rsvp:"));
    assert!(rsvp["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn invalid_email_is_rejected_naming_the_field() {
    let (app, db) = test_app().await;

    let mut payload = valid_payload();
    payload["email"] = json!("not-an-email");
    let (status, body) = post_rsvp(&app, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid RSVP data");
    assert_eq!(detail_fields(&body), ["email"]);

    // Fully rejected: nothing was persisted
    let repo = RsvpRepository::new(db);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn short_guest_name_is_rejected() {
    let (app, _db) = test_app().await;

    let mut payload = valid_payload();
    payload["guestName"] = json!("M");
    let (status, body) = post_rsvp(&app, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_fields(&body), ["guestName"]);
}

#[tokio::test]
async fn guest_count_boundaries() {
    let (app, _db) = test_app().await;

    for (count, expected) in [
        (0, StatusCode::BAD_REQUEST),
        (1, StatusCode::CREATED),
        (10, StatusCode::CREATED),
        (11, StatusCode::BAD_REQUEST),
    ] {
        let mut payload = valid_payload();
        payload["guestCount"] = json!(count);
        let (status, body) = post_rsvp(&app, payload).await;
        assert_eq!(status, expected, "guestCount = {count}");
        if expected == StatusCode::BAD_REQUEST {
            assert_eq!(detail_fields(&body), ["guestCount"]);
        }
    }
}

#[tokio::test]
async fn guest_count_defaults_to_one_when_omitted() {
    let (app, _db) = test_app().await;

    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("guestCount");
    let (status, body) = post_rsvp(&app, payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["rsvp"]["guestCount"], 1);
}

#[tokio::test]
async fn declining_needs_no_meal_preference() {
    let (app, _db) = test_app().await;

    let (status, body) = post_rsvp(
        &app,
        json!({
            "guestName": "Juan Dela Cruz",
            "email": "juan@example.com",
            "attending": "no",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["rsvp"]["attending"], "no");
    assert_eq!(body["rsvp"]["mealPreference"], Value::Null);
}

#[tokio::test]
async fn unknown_attending_value_is_rejected() {
    let (app, _db) = test_app().await;

    let mut payload = valid_payload();
    payload["attending"] = json!("perhaps");
    let (status, body) = post_rsvp(&app, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_fields(&body), ["attending"]);
}

#[tokio::test]
async fn wrong_typed_field_is_rejected_naming_the_field() {
    let (app, _db) = test_app().await;

    let mut payload = valid_payload();
    payload["guestCount"] = json!("five");
    let (status, body) = post_rsvp(&app, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid RSVP data");
    assert_eq!(detail_fields(&body), ["guestCount"]);
}

#[tokio::test]
async fn non_object_payload_is_rejected_as_body_error() {
    let (app, _db) = test_app().await;

    let (status, body) = post_rsvp(&app, json!(["guestName", "email"])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail_fields(&body), ["body"]);
}

#[tokio::test]
async fn storage_failure_maps_to_500_without_partial_writes() {
    let (app, db) = test_app().await;

    // Conflicting field definition: every insert now fails in storage
    db.query("DEFINE FIELD email ON TABLE rsvp TYPE bool")
        .await
        .unwrap()
        .check()
        .unwrap();

    let (status, body) = post_rsvp(&app, valid_payload()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to submit RSVP");
    assert!(body.get("details").is_none());

    // Fully rejected: no partial record
    let repo = RsvpRepository::new(db);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn identical_submissions_create_distinct_records() {
    let (app, db) = test_app().await;

    let (_, first) = post_rsvp(&app, valid_payload()).await;
    let (_, second) = post_rsvp(&app, valid_payload()).await;

    assert_ne!(first["rsvp"]["id"], second["rsvp"]["id"]);

    let repo = RsvpRepository::new(db);
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

// ========== Static content ==========

#[tokio::test]
async fn event_endpoint_serves_the_fixture() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/api/event").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["debutanteName"], "Maria Isabella");
    assert_eq!(body["eventDate"], "2025-12-29");
    assert_eq!(body["venueName"], "The Grand Ballroom");
}

#[tokio::test]
async fn traditions_endpoint_serves_all_three_lists() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/api/traditions").await;

    assert_eq!(status, StatusCode::OK);
    for ceremony in ["treasures", "roses", "candles"] {
        assert_eq!(body[ceremony].as_array().unwrap().len(), 18, "{ceremony}");
    }
}

#[tokio::test]
async fn list_endpoints_preserve_order() {
    let (app, _db) = test_app().await;

    for (path, len) in [("/api/faq", 7), ("/api/transport", 3), ("/api/program", 9)] {
        let (status, body) = get(&app, path).await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), len, "{path}");
        let ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "{path} out of order");
    }
}

#[tokio::test]
async fn debut_data_aggregates_every_endpoint() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/api/debut-data").await;
    assert_eq!(status, StatusCode::OK);

    let (_, event) = get(&app, "/api/event").await;
    let (_, traditions) = get(&app, "/api/traditions").await;
    let (_, faq) = get(&app, "/api/faq").await;
    let (_, transport) = get(&app, "/api/transport").await;
    let (_, program) = get(&app, "/api/program").await;

    assert_eq!(body["event"], event);
    assert_eq!(body["traditions"], traditions);
    assert_eq!(body["faq"], faq);
    assert_eq!(body["transport"], transport);
    assert_eq!(body["program"], program);
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
