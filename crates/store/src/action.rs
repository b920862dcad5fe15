//! State transitions as data.

use kathsnap_core::{Product, ProductId, User};

/// Every way the application state can change.
///
/// Actions are applied by [`crate::reducer::reduce`]; pages usually go
/// through the helper methods on [`crate::AppStore`] instead of
/// constructing these directly.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the session user (`None` logs out).
    SetUser(Option<User>),
    /// Add one unit of a product to the cart, merging with an existing line.
    AddToCart(Product),
    /// Drop a cart line entirely.
    RemoveFromCart(ProductId),
    /// Set a cart line's quantity; zero or below removes the line.
    UpdateCartQuantity {
        /// Product whose line is updated.
        id: ProductId,
        /// New absolute quantity (not additive).
        quantity: i32,
    },
    /// Empty the cart.
    ClearCart,
    /// Save a product to the wishlist unless already present.
    AddToWishlist(Product),
    /// Remove a product from the wishlist.
    RemoveFromWishlist(ProductId),
    /// Replace the search query.
    SetSearchQuery(String),
    /// Toggle the page-level busy flag.
    SetLoading(bool),
    /// Set or clear the transient error message.
    SetError(Option<String>),
}

impl Action {
    /// Whether applying this action requires re-synchronizing the persisted
    /// fields (cart, wishlist, session) to storage.
    #[must_use]
    pub(crate) const fn touches_storage(&self) -> bool {
        match self {
            Self::SetUser(_)
            | Self::AddToCart(_)
            | Self::RemoveFromCart(_)
            | Self::UpdateCartQuantity { .. }
            | Self::ClearCart
            | Self::AddToWishlist(_)
            | Self::RemoveFromWishlist(_) => true,
            Self::SetSearchQuery(_) | Self::SetLoading(_) | Self::SetError(_) => false,
        }
    }
}
