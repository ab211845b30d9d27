//! The closed command set accepted by the cart reducer.

use crate::types::{CartState, LineItem, ProductId, RemotePayload};

/// A state transition request.
///
/// Commands are total: every command on every valid state produces a new
/// valid state. Operating on an id that is absent from the relevant
/// collection is a no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a line to the cart, or merge `quantity` into an existing line
    /// with the same id. A quantity of zero is treated as 1.
    AddItem { item: LineItem, quantity: u32 },
    /// Remove a cart line if present.
    RemoveItem { id: ProductId },
    /// Increase a cart line's quantity; no-op if the id is absent.
    IncrementItem { id: ProductId, amount: u32 },
    /// Decrease a cart line's quantity; reaching zero removes the line.
    DecrementItem { id: ProductId, amount: u32 },
    /// Append to the wishlist if the id is not already present.
    AddToWishlist { item: LineItem },
    /// Remove a wishlist entry if present.
    RemoveFromWishlist { id: ProductId },
    /// Wholesale replacement, used for rehydration from persistence.
    Replace { state: CartState },
    /// Replace only the collections present in the remote payload.
    UpdateFromApi { payload: RemotePayload },
    /// Empty the cart; the wishlist is untouched.
    ClearCart,
    /// Empty the wishlist; the cart is untouched.
    ClearWishlist,
}
