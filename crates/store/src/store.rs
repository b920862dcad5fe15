//! The state container.

use std::cell::RefCell;

use tracing::debug;

use kathsnap_core::{Product, ProductId, User};

use crate::action::Action;
use crate::persist;
use crate::reducer::reduce;
use crate::state::AppState;
use crate::storage::StateStorage;

/// Owns the application state and its storage backend.
///
/// Opening a store hydrates from the backend immediately. Every dispatched
/// action runs the pure reducer and, when the action touches cart,
/// wishlist, or session, re-synchronizes those fields to storage.
///
/// The store is deliberately not `Sync`: all mutations happen on the UI
/// thread through this single dispatch path, one action fully applied
/// before the next. Dispatching from inside a `with_state` callback is a
/// programmer error and panics immediately.
///
/// Stores are plain values - construct as many isolated instances as tests
/// need, each with its own backend.
pub struct AppStore {
    state: RefCell<AppState>,
    storage: RefCell<Box<dyn StateStorage>>,
}

impl AppStore {
    /// Open a store over a storage backend, hydrating persisted state.
    #[must_use]
    pub fn open(storage: impl StateStorage + 'static) -> Self {
        let state = persist::hydrate(&storage);
        debug!(
            cart_lines = state.cart.len(),
            wishlist = state.wishlist.len(),
            logged_in = state.is_logged_in(),
            "hydrated application state"
        );
        Self {
            state: RefCell::new(state),
            storage: RefCell::new(Box::new(storage)),
        }
    }

    /// Apply an action, then persist the affected fields.
    pub fn dispatch(&self, action: Action) {
        debug!(?action, "dispatch");
        let persist_after = action.touches_storage();
        {
            let mut state = self.state.borrow_mut();
            let current = std::mem::take(&mut *state);
            *state = reduce(current, action);
        }
        if persist_after {
            let state = self.state.borrow();
            let mut storage = self.storage.borrow_mut();
            persist::sync(&state, storage.as_mut());
        }
    }

    /// Snapshot the current state.
    #[must_use]
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Read the current state without cloning.
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    // Intention-revealing operations. Pages call these rather than
    // building actions by hand.

    /// Add one unit of a product to the cart.
    pub fn add_to_cart(&self, product: Product) {
        self.dispatch(Action::AddToCart(product));
    }

    /// Remove a product's line from the cart.
    pub fn remove_from_cart(&self, id: ProductId) {
        self.dispatch(Action::RemoveFromCart(id));
    }

    /// Set a cart line's quantity; zero or below removes it.
    pub fn update_cart_quantity(&self, id: ProductId, quantity: i32) {
        self.dispatch(Action::UpdateCartQuantity { id, quantity });
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.dispatch(Action::ClearCart);
    }

    /// Save a product to the wishlist.
    pub fn add_to_wishlist(&self, product: Product) {
        self.dispatch(Action::AddToWishlist(product));
    }

    /// Remove a product from the wishlist.
    pub fn remove_from_wishlist(&self, id: ProductId) {
        self.dispatch(Action::RemoveFromWishlist(id));
    }

    /// Replace the search query.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.dispatch(Action::SetSearchQuery(query.into()));
    }

    /// Toggle the page-level busy flag.
    pub fn set_loading(&self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    /// Set or clear the transient error message.
    pub fn set_error(&self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }

    /// Start a session for the given user.
    pub fn login(&self, user: User) {
        self.dispatch(Action::SetUser(Some(user)));
    }

    /// End the session. Cart and wishlist are left intact.
    pub fn logout(&self) {
        self.dispatch(Action::SetUser(None));
    }
}
