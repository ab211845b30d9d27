//! Integration tests for the remote cart sync adapter.
//!
//! Drives the real `reqwest`-based sync client against an in-process stub
//! server. Local state must stay authoritative on every failure path.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use red_lantern_core::{LineItem, ProductId};
use red_lantern_integration_tests::spawn_stub_server;
use red_lantern_storefront::cart::{CartPersistence, CartStore, CartSync, SyncError};
use red_lantern_storefront::config::SyncConfig;
use red_lantern_storefront::storage::MemoryStore;
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::{Value, json};

fn memory_store() -> CartStore {
    CartStore::open(CartPersistence::new(Arc::new(MemoryStore::new())))
}

fn item(id: i64, title: &str, price: i64) -> LineItem {
    LineItem::new(ProductId::new(id), title, Decimal::new(price, 0))
}

fn sync_client(endpoint: url::Url, token: Option<&str>) -> CartSync {
    CartSync::new(&SyncConfig {
        endpoint,
        token: token.map(SecretString::from),
    })
}

// =============================================================================
// Pull Tests
// =============================================================================

#[tokio::test]
async fn test_pull_applies_partial_payload() {
    let router = Router::new().route(
        "/",
        get(|| async {
            Json(json!({
                "items": [
                    { "id": 1, "title": "Amber Lantern", "price": 30, "quantity": 2 }
                ]
            }))
        }),
    );
    let base = spawn_stub_server(router).await;

    let store = memory_store();
    store.add_to_wishlist(item(9, "Wick", 2));

    sync_client(base, None).pull(&store).await.unwrap();

    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items.first().map(|it| it.quantity), Some(2));
    // Absent wishlist field leaves the local wishlist unchanged.
    assert_eq!(state.wishlist.len(), 1);
}

#[tokio::test]
async fn test_pull_non_success_leaves_state_untouched() {
    let router = Router::new().route("/", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base = spawn_stub_server(router).await;

    let store = memory_store();
    store.add_item(item(1, "Amber Lantern", 30));
    let before = store.state();

    let result = sync_client(base, None).pull(&store).await;
    assert!(matches!(result, Err(SyncError::Status(_))));
    assert_eq!(store.state(), before);
}

#[tokio::test]
async fn test_pull_malformed_body_leaves_state_untouched() {
    let router = Router::new().route("/", get(|| async { "not json at all" }));
    let base = spawn_stub_server(router).await;

    let store = memory_store();
    store.add_item(item(1, "Amber Lantern", 30));
    let before = store.state();

    let result = sync_client(base, None).pull(&store).await;
    assert!(matches!(result, Err(SyncError::Parse(_))));
    assert_eq!(store.state(), before);
}

#[tokio::test]
async fn test_pull_sends_bearer_token() {
    let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let seen_handler = seen.clone();

    let router = Router::new().route(
        "/",
        get(move |headers: HeaderMap| {
            let seen = seen_handler.clone();
            async move {
                *seen.lock().unwrap() = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                Json(json!({}))
            }
        }),
    );
    let base = spawn_stub_server(router).await;

    let store = memory_store();
    sync_client(base, Some("sekrit")).pull(&store).await.unwrap();

    assert_eq!(seen.lock().unwrap().as_deref(), Some("Bearer sekrit"));
}

// =============================================================================
// Push Tests
// =============================================================================

#[tokio::test]
async fn test_push_sends_full_state() {
    let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let received_handler = received.clone();

    let router = Router::new().route(
        "/",
        post(move |Json(body): Json<Value>| {
            let received = received_handler.clone();
            async move {
                *received.lock().unwrap() = Some(body);
                StatusCode::CREATED
            }
        }),
    );
    let base = spawn_stub_server(router).await;

    let store = memory_store();
    store.add_item(item(1, "Amber Lantern", 30));
    store.add_to_wishlist(item(2, "Brass Lantern", 10));

    sync_client(base, None).push(&store.state()).await.unwrap();

    let body = received.lock().unwrap().clone().unwrap();
    assert_eq!(body["items"][0]["id"], 1);
    assert_eq!(body["items"][0]["quantity"], 1);
    assert_eq!(body["wishlist"][0]["id"], 2);
}

#[tokio::test]
async fn test_push_failure_is_reported_but_local_state_stays() {
    let router = Router::new().route("/", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = spawn_stub_server(router).await;

    let store = memory_store();
    store.add_item(item(1, "Amber Lantern", 30));
    let before = store.state();

    let result = sync_client(base, None).push(&before).await;
    assert!(matches!(result, Err(SyncError::Status(_))));
    assert_eq!(store.state(), before);
}
