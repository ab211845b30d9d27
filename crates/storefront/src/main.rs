//! Red Lantern Storefront - composition root.
//!
//! Wires the application together the way a page load would: build the
//! shared [`AppState`] once, rehydrate the session cart, and fetch the
//! listing page from the catalog. Rendering is handled elsewhere; this
//! binary logs what a listing page would show.

#![cfg_attr(not(test), forbid(unsafe_code))]

use red_lantern_storefront::config::StorefrontConfig;
use red_lantern_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; defaults to info level for our
    // crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "red_lantern_storefront=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let app = match AppState::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let cart = app.cart().state();
    tracing::info!(
        items = cart.items.len(),
        units = cart.item_count(),
        subtotal = %cart.subtotal(),
        wishlist = cart.wishlist.len(),
        "Session cart rehydrated"
    );

    // A catalog failure substitutes an empty listing; the cart store is
    // unaffected either way.
    let products = match app.catalog().products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(error = %e, "Catalog fetch failed; showing empty listing");
            Vec::new()
        }
    };

    tracing::info!(count = products.len(), "Listing page loaded");
    for product in &products {
        tracing::info!(
            id = %product.id,
            title = %product.title,
            price = %product.price,
            rating = product.rating,
            "Product"
        );
    }
}
