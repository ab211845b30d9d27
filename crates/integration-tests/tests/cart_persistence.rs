//! Integration tests for the cart store façade over file-backed storage.
//!
//! These tests exercise the full persistence path: commands committed in
//! one store instance must rehydrate into a fresh instance opened over the
//! same directory, and corrupt blobs must fall back to the empty state.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use red_lantern_core::{CartState, LineItem, ProductId};
use red_lantern_storefront::cart::{CART_STORAGE_KEY, CartPersistence, CartStore};
use red_lantern_storefront::storage::{FileStore, SessionStore};
use rust_decimal::Decimal;

fn item(id: i64, title: &str, price_cents: i64) -> LineItem {
    LineItem::new(ProductId::new(id), title, Decimal::new(price_cents, 2))
}

fn open_store(dir: &std::path::Path) -> CartStore {
    let backend = Arc::new(FileStore::open(dir).unwrap());
    CartStore::open(CartPersistence::new(backend))
}

#[test]
fn test_state_survives_store_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = open_store(dir.path());
        store.add_item(item(1, "Amber Lantern", 2999));
        store.increment_item(ProductId::new(1), 2);
        store.add_to_wishlist(item(2, "Brass Lantern", 999));
    }

    let reopened = open_store(dir.path());
    let state = reopened.state();

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items.first().map(|it| it.quantity), Some(3));
    assert_eq!(
        state.wishlist.first().map(|it| it.id),
        Some(ProductId::new(2))
    );
}

#[test]
fn test_persisted_blob_layout() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    store.add_item(item(1, "Amber Lantern", 2999));

    let backend = FileStore::open(dir.path()).unwrap();
    let blob = backend.get(CART_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&blob).unwrap();

    let line = &value["items"][0];
    assert_eq!(line["id"], 1);
    assert_eq!(line["title"], "Amber Lantern");
    assert_eq!(line["quantity"], 1);
    assert!(line["price"].is_number());
    assert!(value["wishlist"].is_array());
}

#[test]
fn test_corrupt_blob_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    {
        let backend = FileStore::open(dir.path()).unwrap();
        backend
            .put(CART_STORAGE_KEY, b"{\"items\": not-json".to_vec())
            .unwrap();
    }

    let store = open_store(dir.path());
    assert!(store.state().is_empty());

    // The first command overwrites the corrupt blob with a valid one.
    store.add_item(item(3, "Candle", 450));
    let reopened = open_store(dir.path());
    assert_eq!(reopened.state().items.len(), 1);
}

#[test]
fn test_clear_commands_persist_independently() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    store.add_item(item(1, "Amber Lantern", 2999));
    store.add_to_wishlist(item(2, "Brass Lantern", 999));

    store.clear_cart();

    let reopened = open_store(dir.path());
    let state = reopened.state();
    assert!(state.items.is_empty());
    assert_eq!(state.wishlist.len(), 1);
}

#[test]
fn test_replace_round_trips_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());

    let mut line = item(7, "Dimmer Switch", 1250);
    line.thumbnail = Some("https://cdn.example/7.webp".to_string());
    line.quantity = 4;
    let state = CartState {
        items: vec![line],
        wishlist: vec![item(8, "Wick", 199)],
    };

    store.replace(state.clone());

    let reopened = open_store(dir.path());
    assert_eq!(reopened.state(), state);
}
