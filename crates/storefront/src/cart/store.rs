//! The cart store façade: single point of truth per session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use red_lantern_core::{CartState, Command, LineItem, ProductId, RemotePayload};
use tracing::debug;

use super::persistence::CartPersistence;

/// Identifies a registered subscriber, for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn Fn(&CartState) + Send + Sync>;

/// The single shared access point through which all UI surfaces read cart
/// state and issue commands.
///
/// Cheaply cloneable via `Arc`; every clone refers to the same session
/// state. Commands are serialized through an internal lock, so they apply
/// in dispatch order and no command observes a state older than one
/// dispatched before it. Each committed transition is published to all
/// subscribers and then persisted fire-and-forget.
///
/// Subscriber callbacks run synchronously on the dispatching thread; they
/// should schedule their own re-render work rather than dispatch further
/// commands from inside the callback.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    state: Mutex<CartState>,
    persistence: CartPersistence,
    subscribers: Mutex<Vec<(SubscriptionId, Callback)>>,
    next_subscription: AtomicU64,
    // Held across apply, publish, and save so concurrent dispatches
    // cannot interleave a stale snapshot into the publish or save order.
    commit: Mutex<()>,
}

impl CartStore {
    /// Open the store, rehydrating from persistence.
    ///
    /// The persisted blob is loaded (and sanitized) before any command is
    /// accepted; a missing or corrupt blob yields the default empty state
    /// without error. No save is triggered until the first command
    /// commits, so a not-yet-read blob is never overwritten.
    #[must_use]
    pub fn open(persistence: CartPersistence) -> Self {
        let state = persistence.load().map_or_else(CartState::new, |loaded| {
            CartState::new().apply(Command::Replace { state: loaded })
        });
        debug!(
            items = state.items.len(),
            wishlist = state.wishlist.len(),
            "Cart store opened"
        );

        Self {
            inner: Arc::new(CartStoreInner {
                state: Mutex::new(state),
                persistence,
                subscribers: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
                commit: Mutex::new(()),
            }),
        }
    }

    /// Current state snapshot.
    ///
    /// The returned value never mutates in place; each command produces a
    /// new state value.
    #[must_use]
    pub fn state(&self) -> CartState {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a listener invoked after every committed transition.
    pub fn subscribe(&self, callback: impl Fn(&CartState) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(callback)));
        id
    }

    /// Remove a listener; after this returns it is never invoked again.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(sub_id, _)| *sub_id != id);
    }

    /// Apply a command, publish the new state, and persist it.
    pub fn dispatch(&self, command: Command) -> CartState {
        let _commit = self
            .inner
            .commit
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let snapshot = {
            let mut state = self
                .inner
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let next = std::mem::take(&mut *state).apply(command);
            state.clone_from(&next);
            next
        };

        self.publish(&snapshot);
        self.inner.persistence.save(&snapshot);
        snapshot
    }

    fn publish(&self, state: &CartState) {
        let subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, callback) in subscribers.iter() {
            callback(state);
        }
    }

    // =========================================================================
    // Command Methods
    // =========================================================================

    /// Add a product snapshot to the cart, merging into an existing line.
    ///
    /// Uses the item's own quantity (minimum 1) as the amount to add.
    pub fn add_item(&self, item: LineItem) -> CartState {
        let quantity = item.quantity.max(1);
        self.dispatch(Command::AddItem { item, quantity })
    }

    /// Remove a cart line; no-op if absent.
    pub fn remove_item(&self, id: ProductId) -> CartState {
        self.dispatch(Command::RemoveItem { id })
    }

    /// Increase a cart line's quantity; no-op if absent.
    pub fn increment_item(&self, id: ProductId, amount: u32) -> CartState {
        self.dispatch(Command::IncrementItem { id, amount })
    }

    /// Decrease a cart line's quantity, removing the line at zero.
    pub fn decrement_item(&self, id: ProductId, amount: u32) -> CartState {
        self.dispatch(Command::DecrementItem { id, amount })
    }

    /// Append to the wishlist; idempotent by product id.
    pub fn add_to_wishlist(&self, item: LineItem) -> CartState {
        self.dispatch(Command::AddToWishlist { item })
    }

    /// Remove a wishlist entry; no-op if absent.
    pub fn remove_from_wishlist(&self, id: ProductId) -> CartState {
        self.dispatch(Command::RemoveFromWishlist { id })
    }

    /// Wholesale state replacement.
    pub fn replace(&self, state: CartState) -> CartState {
        self.dispatch(Command::Replace { state })
    }

    /// Replace only the collections present in a remote payload.
    pub fn update_from_api(&self, payload: RemotePayload) -> CartState {
        self.dispatch(Command::UpdateFromApi { payload })
    }

    /// Empty the cart; the wishlist is untouched.
    pub fn clear_cart(&self) -> CartState {
        self.dispatch(Command::ClearCart)
    }

    /// Empty the wishlist; the cart is untouched.
    pub fn clear_wishlist(&self) -> CartState {
        self.dispatch(Command::ClearWishlist)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
