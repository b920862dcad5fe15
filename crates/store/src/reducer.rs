//! The pure state transition function.
//!
//! `reduce` has no side effects and no storage dependency; persistence is a
//! separate effect applied by [`crate::AppStore`] after the fact. That split
//! keeps every invariant here unit-testable against plain values.

use kathsnap_core::CartItem;

use crate::action::Action;
use crate::state::AppState;

/// Apply one action to the state, producing the next state.
///
/// Invariants maintained:
/// - at most one cart line per product ID, quantity >= 1
/// - a quantity update to zero or below removes the line
/// - at most one wishlist entry per product ID
/// - insertion order of cart and wishlist is preserved
#[must_use]
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetUser(user) => {
            state.user = user;
        }

        Action::AddToCart(product) => {
            if let Some(item) = state.cart.iter_mut().find(|item| item.id() == product.id) {
                item.quantity = item.quantity.saturating_add(1);
            } else {
                state.cart.push(CartItem::new(product));
            }
        }

        Action::RemoveFromCart(id) => {
            state.cart.retain(|item| item.id() != id);
        }

        Action::UpdateCartQuantity { id, quantity } => {
            if quantity <= 0 {
                state.cart.retain(|item| item.id() != id);
            } else if let Some(item) = state.cart.iter_mut().find(|item| item.id() == id) {
                item.quantity = quantity.unsigned_abs();
            }
        }

        Action::ClearCart => {
            state.cart.clear();
        }

        Action::AddToWishlist(product) => {
            if !state.wishlist.iter().any(|p| p.id == product.id) {
                state.wishlist.push(product);
            }
        }

        Action::RemoveFromWishlist(id) => {
            state.wishlist.retain(|product| product.id != id);
        }

        Action::SetSearchQuery(query) => {
            state.search_query = query;
        }

        Action::SetLoading(loading) => {
            state.is_loading = loading;
        }

        Action::SetError(error) => {
            state.error = error;
        }
    }

    state
}
