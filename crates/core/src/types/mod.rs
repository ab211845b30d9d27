//! Core types for Red Lantern.
//!
//! This module provides the cart data model shared by every surface.

pub mod cart;
pub mod id;
pub mod line_item;

pub use cart::{CartState, RemotePayload};
pub use id::*;
pub use line_item::LineItem;
