//! Red Lantern Core - Cart state machine and shared types.
//!
//! This crate provides the reducer-driven cart/wishlist state store used by
//! every Red Lantern surface:
//! - `storefront` - The runtime: store façade, persistence, catalog, sync
//!
//! # Architecture
//!
//! The core crate contains only types and the pure state transition
//! function - no I/O, no HTTP clients, no async. All cart mutation in the
//! system funnels through [`CartState::apply`], so every consumer observes
//! the same invariant-preserving transitions.
//!
//! # Modules
//!
//! - [`types`] - `ProductId`, `LineItem`, `CartState`, `RemotePayload`
//! - [`command`] - The closed command set accepted by the reducer
//! - [`reducer`] - The `(state, command) -> state` transition function

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod command;
pub mod reducer;
pub mod types;

pub use command::Command;
pub use types::*;
