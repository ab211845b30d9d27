//! The pure cart state transition function.
//!
//! All mutation in the system funnels through [`CartState::apply`] so that
//! every surface (cart page, product card, product detail, wishlist page)
//! observes the same invariant-preserving transitions. No UI component
//! computes quantity math beyond read-only display totals.

use crate::command::Command;
use crate::types::{CartState, LineItem, ProductId};

impl CartState {
    /// Apply a command and return the next state.
    ///
    /// Pure and total: no side effects, no I/O, and every command on every
    /// valid state yields a valid state. Commands targeting an id absent
    /// from the relevant collection are no-ops.
    #[must_use]
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::AddItem { item, quantity } => self.add_item(item, quantity.max(1)),
            Command::RemoveItem { id } => Self {
                items: remove_line(self.items, id),
                wishlist: self.wishlist,
            },
            Command::IncrementItem { id, amount } => Self {
                items: adjust_quantity(self.items, id, i64::from(amount)),
                wishlist: self.wishlist,
            },
            Command::DecrementItem { id, amount } => Self {
                items: adjust_quantity(self.items, id, -i64::from(amount)),
                wishlist: self.wishlist,
            },
            Command::AddToWishlist { item } => self.add_to_wishlist(item),
            Command::RemoveFromWishlist { id } => Self {
                items: self.items,
                wishlist: remove_line(self.wishlist, id),
            },
            Command::Replace { state } => state.sanitized(),
            Command::UpdateFromApi { payload } => Self {
                items: payload.items.map_or(self.items, sanitize_replacement),
                wishlist: payload.wishlist.map_or(self.wishlist, sanitize_replacement),
            },
            Command::ClearCart => Self {
                items: Vec::new(),
                wishlist: self.wishlist,
            },
            Command::ClearWishlist => Self {
                items: self.items,
                wishlist: Vec::new(),
            },
        }
    }

    fn add_item(mut self, item: LineItem, quantity: u32) -> Self {
        if let Some(existing) = self.items.iter_mut().find(|it| it.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(LineItem { quantity, ..item });
        }
        self
    }

    fn add_to_wishlist(mut self, item: LineItem) -> Self {
        if !self.contains_wishlist(item.id) {
            self.wishlist.push(item);
        }
        self
    }
}

fn remove_line(lines: Vec<LineItem>, id: ProductId) -> Vec<LineItem> {
    lines.into_iter().filter(|it| it.id != id).collect()
}

/// Adjust one line's quantity by a signed delta, dropping the line when
/// the result is zero or below.
fn adjust_quantity(lines: Vec<LineItem>, id: ProductId, delta: i64) -> Vec<LineItem> {
    lines
        .into_iter()
        .filter_map(|mut it| {
            if it.id != id {
                return Some(it);
            }
            let next = i64::from(it.quantity.max(1)) + delta;
            if next <= 0 {
                return None;
            }
            it.quantity = u32::try_from(next).unwrap_or(u32::MAX);
            Some(it)
        })
        .collect()
}

fn sanitize_replacement(lines: Vec<LineItem>) -> Vec<LineItem> {
    CartState {
        items: lines,
        wishlist: Vec::new(),
    }
    .sanitized()
    .items
}
