//! HTTP-level tests driving the real router against in-memory SQLite.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};

use common::{send, send_request, test_app};

fn kitten_body(breed_id: i64) -> Value {
    json!({
        "name": "Tom",
        "breed_id": breed_id,
        "age_month": 3,
        "description": "playful",
        "color": "grey"
    })
}

async fn create_breed(app: &axum::Router, name: &str) -> i64 {
    let (status, body) = send(app, "POST", "/breeds", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn create_kitten(app: &axum::Router, breed_id: i64) -> Value {
    let (status, body) = send(app, "POST", "/kittens", Some(kitten_body(breed_id))).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

// =============================================================================
// Liveness
// =============================================================================

#[tokio::test]
async fn test_root_returns_greeting() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Hello World" }));
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_kitten_routes() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/kittens/by-breed/{breed_id}"].is_object());
    assert!(body["paths"]["/kittens/{kitten_id}"].is_object());
}

#[tokio::test]
async fn test_openapi_document_describes_health() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/health"]["get"].is_object());
    assert!(body["components"]["schemas"]["HealthResponse"].is_object());
}

// =============================================================================
// Breeds
// =============================================================================

#[tokio::test]
async fn test_list_breeds_empty() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/breeds", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_created_breed_listed_exactly_once() {
    let app = test_app().await;
    let id = create_breed(&app, "Siamese").await;
    create_breed(&app, "Persian").await;

    let (status, body) = send(&app, "GET", "/breeds", None).await;
    assert_eq!(status, StatusCode::OK);

    let matches: Vec<&Value> = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["id"].as_i64() == Some(id))
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "Siamese");
}

#[tokio::test]
async fn test_duplicate_breed_name_conflicts() {
    let app = test_app().await;
    create_breed(&app, "Siamese").await;

    let (status, body) = send(&app, "POST", "/breeds", Some(json!({ "name": "Siamese" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(body["error"]["message"], "Breed 'Siamese' already exists");

    let (_, breeds) = send(&app, "GET", "/breeds", None).await;
    assert_eq!(breeds.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_breed_missing_name_is_unprocessable() {
    let app = test_app().await;
    let (status, body) = send(&app, "POST", "/breeds", Some(json!({}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_breed_with_empty_name_is_accepted() {
    let app = test_app().await;
    let (status, created) = send(&app, "POST", "/breeds", Some(json!({ "name": "" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "");

    let (_, breeds) = send(&app, "GET", "/breeds", None).await;
    assert_eq!(breeds, json!([created]));
}

#[tokio::test]
async fn test_delete_breed_cascades_to_kittens() {
    let app = test_app().await;
    let breed_id = create_breed(&app, "Siamese").await;
    let other_id = create_breed(&app, "Persian").await;
    let doomed = create_kitten(&app, breed_id).await;
    let survivor = create_kitten(&app, other_id).await;

    let (status, body) = send(&app, "DELETE", &format!("/breeds/{}", breed_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": breed_id, "name": "Siamese" }));

    let (status, _) = send(&app, "GET", &format!("/kittens/by-breed/{}", breed_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &format!("/kittens/{}", doomed["id"]), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, kittens) = send(&app, "GET", "/kittens", None).await;
    assert_eq!(kittens, json!([survivor]));
}

#[tokio::test]
async fn test_delete_missing_breed_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(&app, "DELETE", "/breeds/77", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Breed not found");
}

// =============================================================================
// Kittens
// =============================================================================

#[tokio::test]
async fn test_created_kitten_round_trips_through_get() {
    let app = test_app().await;
    let breed_id = create_breed(&app, "Siamese").await;
    let created = create_kitten(&app, breed_id).await;

    let mut expected = kitten_body(breed_id);
    expected["id"] = created["id"].clone();
    assert_eq!(created, expected);

    let (status, fetched) = send(&app, "GET", &format!("/kittens/{}", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn test_create_kitten_with_unknown_breed_persists_nothing() {
    let app = test_app().await;
    let (status, body) = send(&app, "POST", "/kittens", Some(kitten_body(999))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["message"], "Breed 999 does not exist");

    let (_, kittens) = send(&app, "GET", "/kittens", None).await;
    assert_eq!(kittens, json!([]));
}

#[tokio::test]
async fn test_create_kitten_missing_field_is_unprocessable() {
    let app = test_app().await;
    let breed_id = create_breed(&app, "Siamese").await;

    let mut body = kitten_body(breed_id);
    body.as_object_mut().unwrap().remove("color");
    let (status, _) = send(&app, "POST", "/kittens", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, kittens) = send(&app, "GET", "/kittens", None).await;
    assert_eq!(kittens, json!([]));
}

#[tokio::test]
async fn test_create_kitten_with_empty_strings_is_accepted() {
    let app = test_app().await;
    let breed_id = create_breed(&app, "Siamese").await;

    let body = json!({
        "name": "",
        "breed_id": breed_id,
        "age_month": 3,
        "description": "",
        "color": ""
    });
    let (status, created) = send(&app, "POST", "/kittens", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut expected = body;
    expected["id"] = created["id"].clone();
    assert_eq!(created, expected);

    let (_, fetched) = send(&app, "GET", &format!("/kittens/{}", created["id"]), None).await;
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn test_create_kitten_wrong_type_is_unprocessable() {
    let app = test_app().await;
    let breed_id = create_breed(&app, "Siamese").await;

    let mut body = kitten_body(breed_id);
    body["age_month"] = json!("three");
    let (status, body) = send(&app, "POST", "/kittens", Some(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_kitten_invalid_json_is_unprocessable() {
    let app = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/kittens")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, _) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_by_breed_empty_is_not_found_but_list_is_empty() {
    let app = test_app().await;
    let breed_id = create_breed(&app, "Siamese").await;

    let (status, body) = send(&app, "GET", &format!("/kittens/by-breed/{}", breed_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "No kittens found");

    let (status, body) = send(&app, "GET", "/kittens", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_by_breed_returns_only_that_breed() {
    let app = test_app().await;
    let siamese = create_breed(&app, "Siamese").await;
    let persian = create_breed(&app, "Persian").await;
    create_kitten(&app, siamese).await;
    create_kitten(&app, siamese).await;
    create_kitten(&app, persian).await;

    let (status, body) = send(&app, "GET", &format!("/kittens/by-breed/{}", siamese), None).await;
    assert_eq!(status, StatusCode::OK);

    let kittens = body.as_array().unwrap();
    assert_eq!(kittens.len(), 2);
    assert!(kittens.iter().all(|k| k["breed_id"].as_i64() == Some(siamese)));
}

#[tokio::test]
async fn test_get_missing_kitten_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/kittens/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Kitten not found");
}

#[tokio::test]
async fn test_non_numeric_kitten_id_is_bad_request() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/kittens/tom", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_out_of_range_ids_use_error_envelope() {
    let app = test_app().await;

    for (method, uri) in [
        ("GET", "/kittens/99999999999"),
        ("DELETE", "/kittens/99999999999"),
        ("GET", "/kittens/by-breed/99999999999"),
        ("DELETE", "/breeds/abc"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(body["error"]["code"], "BAD_REQUEST", "{method} {uri}");
    }
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let app = test_app().await;
    let siamese = create_breed(&app, "Siamese").await;
    let persian = create_breed(&app, "Persian").await;
    let created = create_kitten(&app, siamese).await;
    let uri = format!("/kittens/{}", created["id"]);

    let replacement = json!({
        "name": "Felix",
        "breed_id": persian,
        "age_month": 7,
        "description": "sleepy",
        "color": "black"
    });
    let (status, updated) = send(&app, "PUT", &uri, Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = replacement;
    expected["id"] = created["id"].clone();
    assert_eq!(updated, expected);

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched, expected);
    assert_ne!(fetched["name"], "Tom");
    assert_ne!(fetched["color"], "grey");
}

#[tokio::test]
async fn test_update_missing_kitten_is_not_found() {
    let app = test_app().await;
    let breed_id = create_breed(&app, "Siamese").await;

    let (status, _) = send(&app, "PUT", "/kittens/42", Some(kitten_body(breed_id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_unknown_breed_is_unprocessable() {
    let app = test_app().await;
    let breed_id = create_breed(&app, "Siamese").await;
    let created = create_kitten(&app, breed_id).await;
    let uri = format!("/kittens/{}", created["id"]);

    let (status, _) = send(&app, "PUT", &uri, Some(kitten_body(555))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_returns_last_state_and_removes_kitten() {
    let app = test_app().await;
    let breed_id = create_breed(&app, "Siamese").await;
    let created = create_kitten(&app, breed_id).await;
    let uri = format!("/kittens/{}", created["id"]);

    let (status, deleted) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// End-to-end walkthrough
// =============================================================================

#[tokio::test]
async fn test_breed_and_kitten_lifecycle() {
    let app = test_app().await;

    let (status, breed) = send(&app, "POST", "/breeds", Some(json!({ "name": "Siamese" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(breed, json!({ "id": 1, "name": "Siamese" }));

    let (status, kitten) = send(&app, "POST", "/kittens", Some(kitten_body(1))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(kitten["id"], 1);

    let (status, fetched) = send(&app, "GET", "/kittens/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, kitten);

    let mut older = kitten_body(1);
    older["age_month"] = json!(4);
    let (status, updated) = send(&app, "PUT", "/kittens/1", Some(older)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["age_month"], 4);

    let (status, deleted) = send(&app, "DELETE", "/kittens/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, updated);

    let (status, _) = send(&app, "GET", "/kittens/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
