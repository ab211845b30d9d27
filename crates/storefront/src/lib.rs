//! Red Lantern Storefront library.
//!
//! This crate provides the storefront runtime as a library, allowing it to
//! be tested and reused: the cart store façade, session-scoped
//! persistence, the read-only catalog client, the optional remote sync
//! adapter, and the toast hub.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;
pub mod storage;
