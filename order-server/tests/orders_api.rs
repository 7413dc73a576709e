//! End-to-end tests for the orders API against an in-memory document store
//! Run: cargo test -p order-server --test orders_api

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Method, Request, StatusCode};
use order_server::{Config, ServerState, build_app};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Fresh app over its own `mem://` database
async fn app() -> Router {
    let state = ServerState::initialize(&Config::new("mem://")).await.unwrap();
    build_app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(raw) => builder
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, order: Value) -> String {
    let (status, body) = send(app, Method::POST, "/order", Some(&order.to_string())).await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["InsertedID"].as_str().unwrap().to_string()
}

fn paella() -> Value {
    json!({ "dish": "Paella", "price": 18.5, "server": "ana", "table": "7" })
}

const MISSING_ID: &str = "0123456789abcdef0123456789abcdef";

#[tokio::test]
async fn create_then_get_returns_same_document() {
    let app = app().await;
    let id = create(&app, paella()).await;

    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

    let (status, body) = send(&app, Method::GET, &format!("/order/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": id, "dish": "Paella", "price": 18.5, "server": "ana", "table": "7" })
    );
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let app = app().await;
    let mut order = paella();
    order["id"] = json!(MISSING_ID);

    let id = create(&app, order).await;
    assert_ne!(id, MISSING_ID);

    let (status, _) = send(&app, Method::GET, &format!("/order/{MISSING_ID}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_incomplete_order() {
    let app = app().await;
    let body = json!({ "dish": "Paella", "server": "ana", "table": "7" }).to_string();

    let (status, err) = send(&app, Method::POST, "/order", Some(&body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].as_str().unwrap().contains("price"));

    let (_, all) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let app = app().await;

    let (status, err) = send(&app, Method::POST, "/order", Some("{\"dish\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].is_string());

    let body = json!({ "dish": "Paella", "price": "cheap", "server": "ana", "table": "7" });
    let (status, _) = send(&app, Method::POST, "/order", Some(&body.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_every_order() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let first = create(&app, paella()).await;
    let second = create(
        &app,
        json!({ "dish": "Tortilla", "price": 6.0, "server": "luis", "table": "2" }),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    let mut ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    ids.sort();
    let mut expected = vec![first.as_str(), second.as_str()];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn list_by_waiter_matches_exactly() {
    let app = app().await;
    create(&app, paella()).await;
    create(&app, json!({ "dish": "Flan", "price": 4.0, "server": "ana", "table": "3" })).await;
    create(&app, json!({ "dish": "Tortilla", "price": 6.0, "server": "Ana", "table": "2" })).await;

    let (status, body) = send(&app, Method::GET, "/orders/waiter/ana", None).await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o["server"] == "ana"));

    let (status, body) = send(&app, Method::GET, "/orders/waiter/nobody", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_by_id_distinguishes_bad_and_missing_ids() {
    let app = app().await;

    let (status, err) = send(&app, Method::GET, "/order/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].as_str().unwrap().contains("not-an-id"));

    let (status, err) = send(&app, Method::GET, &format!("/order/{MISSING_ID}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err, json!({ "error": format!("order {MISSING_ID} not found") }));
}

#[tokio::test]
async fn update_waiter_reports_modified_count() {
    let app = app().await;
    let id = create(&app, paella()).await;
    let uri = format!("/order/{id}/waiter");

    let (status, body) = send(&app, Method::PATCH, &uri, Some(r#"{"server":"luis"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(1));

    let (_, order) = send(&app, Method::GET, &format!("/order/{id}"), None).await;
    assert_eq!(order["server"], "luis");
    assert_eq!(order["dish"], "Paella");

    // same value again: nothing modified
    let (status, body) = send(&app, Method::PUT, &uri, Some(r#"{"server":"luis"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(0));

    let (status, body) = send(&app, Method::PUT, &uri, Some(r#"{"server":"marta"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(1));
}

#[tokio::test]
async fn update_waiter_on_missing_order_modifies_nothing() {
    let app = app().await;
    let uri = format!("/order/{MISSING_ID}/waiter");

    let (status, body) = send(&app, Method::PATCH, &uri, Some(r#"{"server":"luis"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(0));

    let (status, _) = send(&app, Method::GET, &format!("/order/{MISSING_ID}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_waiter_rejects_bad_input() {
    let app = app().await;
    let id = create(&app, paella()).await;
    let uri = format!("/order/{id}/waiter");

    let (status, _) = send(&app, Method::PATCH, &uri, Some("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PATCH, &uri, Some("server=luis")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        send(&app, Method::PATCH, "/order/xyz/waiter", Some(r#"{"server":"luis"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, order) = send(&app, Method::GET, &format!("/order/{id}"), None).await;
    assert_eq!(order["server"], "ana");
}

#[tokio::test]
async fn replace_keeps_id_and_swaps_fields() {
    let app = app().await;
    let id = create(&app, paella()).await;
    let uri = format!("/order/{id}");
    let new_order = json!({ "dish": "Gazpacho", "price": 7.5, "server": "luis", "table": "9" });

    let (status, body) = send(&app, Method::PUT, &uri, Some(&new_order.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(1));

    let (_, order) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(
        order,
        json!({ "id": id, "dish": "Gazpacho", "price": 7.5, "server": "luis", "table": "9" })
    );

    // identical content: nothing modified
    let (status, body) = send(&app, Method::PUT, &uri, Some(&new_order.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(0));
}

#[tokio::test]
async fn replace_with_invalid_order_leaves_document_unchanged() {
    let app = app().await;
    let id = create(&app, paella()).await;
    let uri = format!("/order/{id}");

    let partial = json!({ "dish": "Gazpacho", "server": "luis" }).to_string();
    let (status, err) = send(&app, Method::PUT, &uri, Some(&partial)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].is_string());

    let (status, _) = send(&app, Method::PUT, &uri, Some("[1, 2]")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, order) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(order["dish"], "Paella");
    assert_eq!(order["price"], 18.5);
}

#[tokio::test]
async fn replace_checks_id_and_never_creates() {
    let app = app().await;

    let (status, _) = send(&app, Method::PUT, "/order/abc", Some(&paella().to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let uri = format!("/order/{MISSING_ID}");
    let (status, body) = send(&app, Method::PUT, &uri, Some(&paella().to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(0));

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_reports_deleted_count() {
    let app = app().await;
    let id = create(&app, paella()).await;
    let uri = format!("/order/{id}");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(1));

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(0));

    let (status, _) = send(&app, Method::DELETE, "/order/zz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn uppercase_id_resolves_to_same_order() {
    let app = app().await;
    let id = create(&app, paella()).await;

    let (status, body) =
        send(&app, Method::GET, &format!("/order/{}", id.to_uppercase()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(id));
}

#[tokio::test]
async fn health_reports_store_reachable() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = app().await;
    let request = Request::builder().uri("/orders").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn client_request_id_is_echoed_back() {
    let app = app().await;
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "kitchen-42")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "kitchen-42");
}
