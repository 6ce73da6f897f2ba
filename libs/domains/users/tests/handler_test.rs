//! Handler tests for the Users domain
//!
//! Drive the users router with an in-memory repository, one shared
//! router per test so state carries across requests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register(app: &Router, id: &str, email: &str) -> (StatusCode, Value) {
    send(app, "POST", "/create", Some(json!({ "id": id, "email": email }))).await
}

fn item(user_id: &str, product_id: &str) -> Option<Value> {
    Some(json!({ "userId": user_id, "productId": product_id }))
}

#[tokio::test]
async fn test_create_user_returns_message() {
    let app = app();

    let (status, body) = register(&app, "u1", "alice@x.com").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "user has been created successfully" }));

    let (status, user) = send(&app, "GET", "/u1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        user,
        json!({ "id": "u1", "email": "alice@x.com", "cart": [], "favorites": [] })
    );
}

#[tokio::test]
async fn test_create_user_duplicate_email_conflicts() {
    let app = app();
    register(&app, "u1", "alice@x.com").await;

    let (status, body) = register(&app, "u2", "alice@x.com").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");

    let (_, users) = send(&app, "GET", "/", None).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_user_taken_id_conflicts() {
    let app = app();
    register(&app, "u1", "alice@x.com").await;
    send(&app, "POST", "/add/cart", item("u1", "p1")).await;

    let (status, body) = register(&app, "u1", "bob@x.com").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");

    let (_, user) = send(&app, "GET", "/u1", None).await;
    assert_eq!(user["email"], "alice@x.com");
    assert_eq!(user["cart"], json!(["p1"]));
}

#[tokio::test]
async fn test_email_comparison_is_case_sensitive() {
    let app = app();
    register(&app, "u1", "alice@x.com").await;

    let (status, _) = register(&app, "u2", "Alice@x.com").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_user_blank_fields_rejected() {
    let app = app();

    let (status, body) = register(&app, "", "alice@x.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["id"][0]["message"], "User ID is required");
}

#[tokio::test]
async fn test_create_user_missing_field_is_invalid() {
    let app = app();

    let (status, body) = send(&app, "POST", "/create", Some(json!({ "id": "u1" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["email"][0]["message"], "Email is required");

    let (_, users) = send(&app, "GET", "/", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn test_add_to_cart_missing_product_is_invalid() {
    let app = app();
    register(&app, "u1", "alice@x.com").await;

    let (status, body) = send(&app, "POST", "/add/cart", Some(json!({ "userId": "u1" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["product_id"][0]["message"], "Product ID is required");

    let (_, user) = send(&app, "GET", "/u1", None).await;
    assert_eq!(user["cart"], json!([]));
}

#[tokio::test]
async fn test_create_user_wrong_type_is_unprocessable() {
    let app = app();

    let body = json!({ "id": 7, "email": "alice@x.com" });
    let (status, body) = send(&app, "POST", "/create", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let app = app();

    let (status, body) = send(&app, "GET", "/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1004);
}

#[tokio::test]
async fn test_list_users_in_creation_order() {
    let app = app();
    register(&app, "u2", "b@x.com").await;
    register(&app, "u1", "a@x.com").await;

    let (status, users) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["u2", "u1"]);
}

#[tokio::test]
async fn test_cart_keeps_duplicates_and_remove_drops_all() {
    let app = app();
    register(&app, "u1", "alice@x.com").await;

    send(&app, "POST", "/add/cart", item("u1", "p1")).await;
    send(&app, "POST", "/add/cart", item("u1", "p2")).await;
    let (status, user) = send(&app, "POST", "/add/cart", item("u1", "p1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["cart"], json!(["p1", "p2", "p1"]));

    let (status, user) = send(&app, "DELETE", "/remove/cart", item("u1", "p1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["cart"], json!(["p2"]));
}

#[tokio::test]
async fn test_remove_absent_product_is_noop() {
    let app = app();
    register(&app, "u1", "alice@x.com").await;
    send(&app, "POST", "/add/cart", item("u1", "p2")).await;

    let (status, user) = send(&app, "DELETE", "/remove/cart", item("u1", "p9")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["cart"], json!(["p2"]));
}

#[tokio::test]
async fn test_favorites_flow() {
    let app = app();
    register(&app, "u1", "alice@x.com").await;

    let (_, user) = send(&app, "POST", "/add/favorite", item("u1", "p1")).await;
    assert_eq!(user["favorites"], json!(["p1"]));
    assert_eq!(user["cart"], json!([]));

    let (_, user) = send(&app, "DELETE", "/remove/favorite", item("u1", "p1")).await;
    assert_eq!(user["favorites"], json!([]));

    let (status, user) = send(&app, "DELETE", "/remove/favorite", item("u1", "p1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["favorites"], json!([]));
}

#[tokio::test]
async fn test_clear_is_idempotent_and_scoped() {
    let app = app();
    register(&app, "u1", "alice@x.com").await;
    send(&app, "POST", "/add/cart", item("u1", "p1")).await;
    send(&app, "POST", "/add/favorite", item("u1", "p2")).await;

    let (status, user) = send(&app, "DELETE", "/u1/cart/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["cart"], json!([]));
    assert_eq!(user["favorites"], json!(["p2"]));

    let (status, user) = send(&app, "DELETE", "/u1/cart/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["cart"], json!([]));

    let (_, user) = send(&app, "DELETE", "/u1/favorites/clear", None).await;
    assert_eq!(user["favorites"], json!([]));
}

#[tokio::test]
async fn test_list_operations_on_unknown_user() {
    let app = app();

    let (status, _) = send(&app, "POST", "/add/cart", item("ghost", "p1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/ghost/favorites/clear", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_operations_reject_blank_ids() {
    let app = app();
    register(&app, "u1", "alice@x.com").await;

    let (status, body) = send(&app, "POST", "/add/favorite", item("u1", " ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["product_id"][0]["message"], "Product ID is required");

    let (status, _) = send(&app, "DELETE", "/remove/cart", item("", "p1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
