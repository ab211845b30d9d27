//! The per-session cart store: façade, persistence, and remote sync.
//!
//! Exactly one [`CartStore`] exists per session. All UI surfaces read
//! snapshots and issue commands through it; every mutation funnels through
//! the pure reducer in `red-lantern-core`.

mod persistence;
mod store;
mod sync;

pub use persistence::{CART_STORAGE_KEY, CartPersistence};
pub use store::{CartStore, SubscriptionId};
pub use sync::{CartSync, SyncError};
