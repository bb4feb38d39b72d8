use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::application::http::server::http_server::{routes, state};
use crate::args::Args;

const MENU: &str = r#"{
  "data": [
    {"item": "Burgers", "price": 8.99, "category": "Mains"},
    {"item": "Veggie Wrap", "price": 7.5, "category": "Mains", "in_stock": false},
    {"item": "French Fries", "price": 2.99, "category": "Sides"},
    {"item": "Cola", "price": 1.5, "category": "Drinks"}
  ]
}"#;

const WALLET: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";
const PAID_HASH: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";
const UNKNOWN_HASH: &str = "0x2222222222222222222222222222222222222222222222222222222222222222";

/// Serve a minimal Ethereum JSON-RPC node that knows one transaction of
/// 0.01 ether to `WALLET`. Returns its URL.
async fn spawn_ethereum_node() -> String {
    let node = Router::new().route(
        "/",
        post(|Json(request): Json<Value>| async move {
            let result = match request["method"].as_str() {
                Some("web3_clientVersion") => json!("Geth/v1.14.0-test"),
                Some("eth_getTransactionByHash") if request["params"][0] == PAID_HASH => json!({
                    "hash": PAID_HASH,
                    "from": "0x3333333333333333333333333333333333333333",
                    "to": WALLET,
                    "value": "0x2386f26fc10000",
                }),
                _ => Value::Null,
            };
            Json(json!({"jsonrpc": "2.0", "id": request["id"], "result": result}))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, node).await.unwrap() });

    format!("http://{address}/")
}

async fn test_server(dir: &TempDir) -> TestServer {
    build_server(dir, None).await
}

async fn payment_server(dir: &TempDir) -> TestServer {
    let endpoint = spawn_ethereum_node().await;
    build_server(dir, Some(endpoint)).await
}

async fn build_server(dir: &TempDir, ethereum_endpoint: Option<String>) -> TestServer {
    let menu_path = dir.path().join("menu.json");
    std::fs::write(&menu_path, MENU).unwrap();

    let mut args = Args::try_parse_from(["menubot", "serve"]).unwrap();
    args.server.root_path = String::new();
    args.menu.path = menu_path;
    args.llm.api_key = Some("test-key".to_string());
    args.llm.model = Some("test-model".to_string());
    args.voice.audio_dir = dir.path().join("audio");
    args.voice.work_dir = Some(dir.path().join("work"));
    args.ethereum.wallet_address = ethereum_endpoint.as_ref().map(|_| WALLET.to_string());
    args.ethereum.endpoint = ethereum_endpoint;

    let state = state(Arc::new(args)).await.unwrap();
    let mut server = TestServer::new(routes(state)).unwrap();
    server.save_cookies();
    server
}

#[tokio::test]
async fn test_cart_follows_session_cookie() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir).await;

    server
        .post("/add_to_cart")
        .json(&json!({"name": "Burgers", "price": "8.99", "quantity": 2}))
        .await
        .assert_status_ok();
    server
        .post("/add_to_cart")
        .json(&json!({"name": "French Fries", "price": "2.99"}))
        .await
        .assert_status_ok();

    let cart: Value = server.get("/cart").await.json();
    assert_eq!(cart["total"], "20.97");
    assert_eq!(cart["item_count"], 3);

    let cart: Value = server
        .post("/remove_from_cart")
        .json(&json!({"name": "Burgers"}))
        .await
        .json();
    assert_eq!(cart["total"], "2.99");
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_to_cart_rejects_zero_quantity() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir).await;

    let response = server
        .post("/add_to_cart")
        .json(&json!({"name": "Burgers", "price": "8.99", "quantity": 0}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn test_category_lists_in_stock_items() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir).await;

    let body: Value = server.get("/category/Mains").await.json();

    assert_eq!(body["category"], "Mains");
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["item"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Burgers"]);
}

#[tokio::test]
async fn test_index_and_menu() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir).await;

    let index = server.get("/").await;
    index.assert_status_ok();
    assert!(index.text().contains("Drinks"));

    let menu: Value = server.get("/menu").await.json();
    assert_eq!(menu["categories"], json!(["Mains", "Sides", "Drinks"]));
}

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir).await;

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_payment_routes_absent_without_ethereum() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir).await;

    server
        .get("/payment")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_audio_rejects_traversal() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir).await;

    server
        .delete("/delete_audio")
        .json(&json!({"file_name": "../menu.json"}))
        .expect_failure()
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(dir.path().join("menu.json").exists());
}

#[tokio::test]
async fn test_payment_page_shows_wallet() {
    let dir = TempDir::new().unwrap();
    let server = payment_server(&dir).await;

    let page = server.get("/payment").await;

    page.assert_status_ok();
    assert!(page.text().contains(WALLET));
    assert!(page.text().contains("<svg"));
}

#[tokio::test]
async fn test_check_transaction_accepts_numeric_amount() {
    let dir = TempDir::new().unwrap();
    let server = payment_server(&dir).await;

    let body: Value = server
        .post("/check_transaction")
        .json(&json!({"tx_hash": PAID_HASH, "amount": 0.01}))
        .await
        .json();

    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Payment received!");
}

#[tokio::test]
async fn test_check_transaction_wrong_amount_or_hash_fails() {
    let dir = TempDir::new().unwrap();
    let server = payment_server(&dir).await;

    let wrong_amount = server
        .post("/check_transaction")
        .json(&json!({"tx_hash": PAID_HASH, "amount": "0.02"}))
        .await;
    wrong_amount.assert_status_ok();
    assert_eq!(wrong_amount.json::<Value>()["status"], "failure");

    let unknown: Value = server
        .post("/check_transaction")
        .json(&json!({"tx_hash": UNKNOWN_HASH, "amount": "0.01"}))
        .await
        .json();
    assert_eq!(unknown["status"], "failure");

    server
        .post("/check_transaction")
        .json(&json!({"tx_hash": PAID_HASH, "amount": "plenty"}))
        .expect_failure()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_webhook_status_follows_the_check() {
    let dir = TempDir::new().unwrap();
    let server = payment_server(&dir).await;

    let received = server
        .post("/webhook")
        .json(&json!({"event": "mined_transaction", "hash": PAID_HASH}))
        .await;
    received.assert_status_ok();
    let body: Value = received.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["amount_received"], "0.01");

    let unknown = server
        .post("/webhook")
        .json(&json!({"event": "mined_transaction", "hash": UNKNOWN_HASH}))
        .expect_failure()
        .await;
    unknown.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(unknown.json::<Value>()["message"], "Invalid data.");
}
