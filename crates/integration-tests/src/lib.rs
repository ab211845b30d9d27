//! Integration tests for Red Lantern.
//!
//! # Test Categories
//!
//! - `cart_persistence` - Store façade + file-backed session storage
//! - `cart_sync` - Remote sync adapter against a stub HTTP server
//! - `catalog` - Catalog client against a stub HTTP server
//!
//! The stub server is an in-process `axum` router bound to an ephemeral
//! port; tests drive the real `reqwest`-based clients against it.

use axum::Router;
use url::Url;

pub use url;

/// Serve `router` on an ephemeral local port and return its base URL.
///
/// The server task runs until the test's runtime shuts down.
///
/// # Panics
///
/// Panics if the listener cannot be bound; test infrastructure only.
pub async fn spawn_stub_server(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });

    format!("http://{addr}/").parse().expect("stub base url")
}
