//! The aggregate application state.

use kathsnap_core::{CartItem, Product, ProductId, User};

/// Everything the pages read: session, cart, wishlist, search query, and
/// the transient UI flags.
///
/// Cart and wishlist keep insertion order (first added, first listed). The
/// state is created with defaults at startup and immediately overwritten by
/// whatever hydration finds in storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// The logged-in user, or `None` for a guest.
    pub user: Option<User>,
    /// Cart lines, one per distinct product ID.
    pub cart: Vec<CartItem>,
    /// Saved products, one per distinct product ID.
    pub wishlist: Vec<Product>,
    /// Current search box contents.
    pub search_query: String,
    /// Transient busy flag for page-level spinners.
    pub is_loading: bool,
    /// Last transient error message, if any.
    pub error: Option<String>,
}

impl AppState {
    /// Total units in the cart (sum of line quantities).
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    /// Quantity of a product in the cart, if present.
    #[must_use]
    pub fn cart_quantity(&self, id: ProductId) -> Option<u32> {
        self.cart
            .iter()
            .find(|item| item.id() == id)
            .map(|item| item.quantity)
    }

    /// Whether a product is on the wishlist.
    #[must_use]
    pub fn in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.iter().any(|product| product.id == id)
    }

    /// Whether a session is active.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
