use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use bytes::Bytes;
use http_body_util::BodyExt;
use pmb_api::{AppState, build_router};
use pmb_assistant::{Assistant, AssistantError, ChatClient};
use pmb_storage::InMemorySiteStore;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

struct EchoClient;

#[async_trait]
impl ChatClient for EchoClient {
    async fn generate(&self, context: &str, prompt: &str) -> Result<String, AssistantError> {
        assert!(context.contains("QNHW002"));
        Ok(format!("echo: {prompt}"))
    }
}

struct DownClient;

#[async_trait]
impl ChatClient for DownClient {
    async fn generate(&self, _context: &str, _prompt: &str) -> Result<String, AssistantError> {
        Err(AssistantError::Transport("connection refused".to_string()))
    }
}

fn demo_app(assistant: Option<Arc<dyn ChatClient>>) -> Router {
    let store = Arc::new(InMemorySiteStore::with_demo_sites());
    let assistant = assistant.map(|client| Arc::new(Assistant::new(client)));
    build_router(AppState::new(store, assistant))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .expect("request");
    let response = app.clone().oneshot(req).await.expect("response");
    let status = response.status();
    let bytes: Bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json")
    };
    (status, value)
}

fn f64_at(value: &Value, pointer: &str) -> f64 {
    value
        .pointer(pointer)
        .and_then(Value::as_f64)
        .unwrap_or_else(|| panic!("missing number at {pointer}: {value}"))
}

#[tokio::test]
async fn health_sets_request_ids() {
    let app = demo_app(None);
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(req).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert!(response.headers().contains_key("x-trace-id"));
}

#[tokio::test]
async fn list_sites_with_filters() {
    let app = demo_app(None);

    let (status, body) = send(&app, "GET", "/sites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(3));

    let (_, body) = send(&app, "GET", "/api/sites?search=qnhw", None).await;
    assert_eq!(body["data"][0]["code"], "QNHW002");
    assert_eq!(body["data"][0]["inventoryCount"], 1);

    let (_, body) = send(&app, "GET", "/sites?region=Central", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let (status, body) = send(&app, "GET", "/sites?region=Mars", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID.REQUEST");
}

#[tokio::test]
async fn summary_counts_demo_sites() {
    let app = demo_app(None);
    let (status, body) = send(&app, "GET", "/sites/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["activePercent"], 67);
    assert_eq!(f64_at(&body, "/data/totalPowerKw"), 87.0);
}

#[tokio::test]
async fn unknown_site_is_not_found() {
    let app = demo_app(None);
    let (status, body) = send(&app, "GET", "/sites/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE.NOT_FOUND");

    let (status, _) = send(&app, "GET", "/sites/404/design", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_site_replaces_and_checks_code() {
    let app = demo_app(None);

    let duplicate = json!({
        "id": "", "code": "QNHW002", "name": "Dup", "region": "North", "status": "ACTIVE"
    });
    let (status, body) = send(&app, "PUT", "/sites/9", Some(duplicate)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);

    let mismatch = json!({
        "id": "8", "code": "X1", "name": "X", "region": "South", "status": "ACTIVE"
    });
    let (status, _) = send(&app, "PUT", "/sites/9", Some(mismatch)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let replacement = json!({
        "id": "1", "code": "QNHW002", "name": "Móng Cái", "region": "Miền Bắc",
        "status": "ACTIVE", "designData": null
    });
    let (status, _) = send(&app, "PUT", "/sites/1", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/sites/1", None).await;
    assert_eq!(body["data"]["status"], "ACTIVE");
    assert_eq!(body["data"]["designData"]["racks"], json!([]));
    assert_eq!(body["data"]["inventory"], json!([]));
}

#[tokio::test]
async fn put_site_without_id_takes_path_id() {
    let app = demo_app(None);
    let body = json!({
        "code": "HNI009", "name": "Hà Nội 9", "region": "Miền Bắc", "status": "PLANNED"
    });
    let (status, body) = send(&app, "PUT", "/sites/9", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "9");

    let (status, body) = send(&app, "GET", "/sites/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["code"], "HNI009");
}

#[tokio::test]
async fn sync_after_delete_is_not_found() {
    let app = demo_app(None);
    let (status, _) = send(&app, "DELETE", "/sites/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/sites/1/sync/power-to-cost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, "GET", "/sites/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_site_then_not_found() {
    let app = demo_app(None);
    let (status, _) = send(&app, "DELETE", "/sites/2", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", "/sites/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn design_view_recomputes_current() {
    let app = demo_app(None);
    let items = json!({ "items": [
        { "name": "Router", "quantity": 2, "powerRatedW": 480, "voltage": 48, "current": 999 },
        { "name": "Fan", "quantity": 1, "powerRatedW": 100, "voltage": 0 }
    ]});
    let (status, body) = send(&app, "PUT", "/sites/1/design/calc-items", Some(items)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(f64_at(&body, "/data/calcItems/0/current"), 10.0);
    assert_eq!(f64_at(&body, "/data/calcItems/1/current"), 0.0);
    assert_eq!(f64_at(&body, "/data/totalLoadW"), 1060.0);

    let (_, body) = send(&app, "GET", "/api/sites/1/design", None).await;
    assert_eq!(body["data"]["calcItems"].as_array().map(Vec::len), Some(2));

    let (_, body) = send(&app, "GET", "/sites/1", None).await;
    assert!(body["data"]["designData"]["calcItems"][0].get("current").is_none());
}

#[tokio::test]
async fn cost_items_total_and_validation() {
    let app = demo_app(None);
    let items = json!({ "items": [
        { "itemName": "A", "quantity": 2, "unitPrice": 1000 },
        { "itemName": "B", "quantity": 3, "unitPrice": 500 }
    ]});
    let (status, body) = send(&app, "PUT", "/sites/2/design/cost-items", Some(items)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(f64_at(&body, "/data/grandTotal"), 3500.0);
    assert_eq!(f64_at(&body, "/data/costEstimateItems/0/totalAmount"), 2000.0);

    let invalid = json!({ "items": [{ "itemName": "A", "quantity": 0, "unitPrice": 1 }] });
    let (status, _) = send(&app, "PUT", "/sites/2/design/cost-items", Some(invalid)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn battery_sizing_and_efficiency_bounds() {
    let app = demo_app(None);
    let params = json!({
        "dcLoadW": 960, "targetBackupTime": 8, "batteryVoltage": 48,
        "batteryAh": 100, "efficiency": 0.9
    });
    let (status, body) = send(&app, "PUT", "/sites/1/design/battery", Some(params)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(f64_at(&body, "/data/requiredAh"), 177.78);
    assert_eq!(f64_at(&body, "/data/stringCount"), 1.78);
    assert_eq!(body["data"]["recommendedStrings"], 2);

    let invalid = json!({ "batteryVoltage": 48, "batteryAh": 100, "efficiency": 0 });
    let (status, _) = send(&app, "PUT", "/sites/1/design/battery", Some(invalid)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sync_chain_dedupes_cost_and_appends_inventory() {
    let app = demo_app(None);
    let items = json!({ "items": [
        { "name": "Router", "quantity": 2, "powerRatedW": 480, "voltage": 48 },
        { "name": "Switch", "quantity": 1, "powerRatedW": 120, "voltage": 48 }
    ]});
    send(&app, "PUT", "/sites/1/design/calc-items", Some(items)).await;

    let (status, body) = send(&app, "POST", "/sites/1/sync/power-to-cost", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["created"], 2);
    let (_, body) = send(&app, "POST", "/sites/1/sync/power-to-cost", None).await;
    assert_eq!(body["data"]["created"], 0);
    assert_eq!(body["data"]["targetRows"], 2);

    send(&app, "POST", "/sites/1/sync/cost-to-inventory", None).await;
    let (_, body) = send(&app, "POST", "/sites/1/sync/cost-to-inventory", None).await;
    assert_eq!(body["data"]["created"], 2);

    let (_, body) = send(&app, "GET", "/sites/1/inventory", None).await;
    let ledger = body["data"].as_array().expect("ledger");
    assert_eq!(ledger.len(), 5);
    assert_eq!(ledger[1]["status"], "PLANNED");
    assert_eq!(ledger[1]["type"], "OFFLINE");
    assert_eq!(ledger[1]["note"], "Đồng bộ từ Dự toán. Đồng bộ từ bảng CS");
}

#[tokio::test]
async fn append_inventory_item_generates_id() {
    let app = demo_app(None);
    let item = json!({ "itemCode": "ACQ-01", "itemName": "Ắc quy", "quantity": 4, "unit": "Bình" });
    let (status, body) = send(&app, "POST", "/sites/3/inventory", Some(item)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["data"]["id"].as_str().unwrap_or_default().is_empty());

    let (status, _) = send(&app, "POST", "/sites/3/inventory", Some(json!({ "quantity": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_without_api_key_is_unavailable() {
    let app = demo_app(None);
    let (status, body) = send(&app, "POST", "/chat", Some(json!({ "prompt": "hi" }))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "ASSISTANT.UNAVAILABLE");

    let (_, body) = send(&app, "GET", "/chat/history", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["role"], "model");
}

#[tokio::test]
async fn chat_reply_extends_history() {
    let app = demo_app(Some(Arc::new(EchoClient)));
    let (status, body) = send(&app, "POST", "/api/chat", Some(json!({ "prompt": "Có mấy trạm?" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["reply"], "echo: Có mấy trạm?");
    assert_eq!(body["data"]["history"].as_array().map(Vec::len), Some(3));

    let (status, _) = send(&app, "POST", "/chat", Some(json!({ "prompt": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_failure_leaves_sites_untouched() {
    let app = demo_app(Some(Arc::new(DownClient)));
    let (status, body) = send(&app, "POST", "/chat", Some(json!({ "prompt": "hi" }))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "ASSISTANT.UNAVAILABLE");

    let (_, body) = send(&app, "GET", "/sites", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(3));
}
