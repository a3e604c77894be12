//! End-to-end tests driving the axum router with in-process requests.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{CASHIER_ID, GARSON_ID, seed_fixtures, test_pool};
use http_body_util::BodyExt;
use pos_server::{Config, ServerState, api};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

fn app(pool: SqlitePool) -> Router {
    let config = Config::with_overrides("/tmp/cafe-pos-test", 0);
    api::router().with_state(ServerState::new(config, pool))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(v) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn catalog_endpoints_serve_seeded_data() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let app = app(pool);

    let (status, body) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 1);
    assert_eq!(body["categories"][0]["nameEn"], "Beverages");

    let (status, body) = send(&app, "GET", "/api/menu?categoryId=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["categoryNameEn"], "Beverages");

    let (status, body) = send(&app, "GET", "/api/tables", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tables"].as_array().unwrap().len(), 3);
    assert_eq!(body["tables"][0]["status"], "available");

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn order_lifecycle_over_http() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let app = app(pool);

    // Create: 2x Kebab (12.00) + 2x Espresso (2.00) = 28.00
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "tableId": 1,
            "garsonId": GARSON_ID,
            "items": [
                {"menuItemId": 2, "quantity": 2, "unitPrice": 12.00},
                {"menuItemId": 1, "quantity": 2, "unitPrice": 2.00, "notes": "no sugar"}
            ],
            "notes": "window seat"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = body["order"]["id"].as_i64().unwrap();
    assert_eq!(body["order"]["status"], "pending");
    assert_eq!(body["order"]["totalAmount"], 28.0);
    assert_eq!(body["order"]["finalAmount"], 28.0);

    // Fetch with items
    let (status, body) = send(&app, "GET", &format!("/api/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["totalAmount"], 28.0);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["notes"], "no sugar");

    // List filters
    let (status, body) = send(&app, "GET", "/api/orders?status=pending", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);
    assert_eq!(body["orders"][0]["tableNumber"], 1);
    assert_eq!(body["orders"][0]["garsonName"], "Garson One");

    // Apply a 10% discount
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{order_id}"),
        Some(json!({"discount": {"type": "percentage", "value": 10}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["discountAmount"], 2.8);
    assert_eq!(body["order"]["finalAmount"], 25.2);

    // Settle in cash with change
    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        Some(json!({
            "orderId": order_id,
            "cashierId": CASHIER_ID,
            "paymentMethod": "cash",
            "cashAmount": 30.00
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["payment"]["amountPaid"], 25.2);
    assert_eq!(body["payment"]["changeGiven"], 4.8);

    // Order is paid, table is free again
    let (_, body) = send(&app, "GET", &format!("/api/orders/{order_id}"), None).await;
    assert_eq!(body["order"]["status"], "paid");
    assert_eq!(body["order"]["paymentMethod"], "cash");

    let (_, body) = send(&app, "GET", "/api/tables", None).await;
    assert_eq!(body["tables"][0]["status"], "available");
    assert_eq!(body["tables"][0]["currentOrderId"], Value::Null);

    // Statistics reflect the settled order
    let (status, body) = send(&app, "GET", "/api/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalOrders"], 1);
    assert_eq!(body["paidOrders"], 1);
    assert_eq!(body["activeOrders"], 0);
    assert_eq!(body["totalRevenue"], 25.2);
    assert_eq!(body["cashRevenue"], 25.2);
}

#[tokio::test]
async fn errors_are_surfaced_as_error_objects() {
    let pool = test_pool().await;
    seed_fixtures(&pool).await;
    let app = app(pool);

    // Unknown order -> 404 {"error": ...}
    let (status, body) = send(&app, "GET", "/api/orders/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));

    // Empty cart -> 400
    let (status, _) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({"tableId": 1, "garsonId": GARSON_ID, "items": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Insufficient tender -> 402
    let (_, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "tableId": 1,
            "garsonId": GARSON_ID,
            "items": [{"menuItemId": 1, "quantity": 2, "unitPrice": 25.00}]
        })),
    )
    .await;
    let order_id = body["order"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        Some(json!({
            "orderId": order_id,
            "cashierId": CASHIER_ID,
            "paymentMethod": "mixed",
            "cashAmount": 20.00,
            "cardAmount": 15.00
        })),
    )
    .await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert!(body["error"].as_str().unwrap().contains("less than"));

    // Illegal transition -> 409
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{order_id}"),
        Some(json!({"status": "served"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
