//! Scoped access to a store for page components.
//!
//! Pages do not receive an [`AppStore`] directly; the application shell
//! wraps them in an [`AppProvider`] scope and they call [`use_app`] to get
//! a handle. A [`use_app`] call outside any provider scope is a programmer
//! error and panics immediately rather than limping along with detached
//! state.

use std::cell::RefCell;
use std::rc::Rc;

use kathsnap_core::{Product, ProductId, User};

use crate::action::Action;
use crate::state::AppState;
use crate::store::AppStore;

thread_local! {
    static ACTIVE: RefCell<Vec<Rc<AppStore>>> = const { RefCell::new(Vec::new()) };
}

/// Owns a store and scopes access to it.
///
/// Providers are plain values; tests create as many isolated ones as they
/// need. Scopes nest, innermost wins.
pub struct AppProvider {
    store: Rc<AppStore>,
}

impl AppProvider {
    /// Wrap a store in a provider.
    #[must_use]
    pub fn new(store: AppStore) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// A handle to the provided store, independent of any scope.
    #[must_use]
    pub fn handle(&self) -> AppHandle {
        AppHandle {
            store: Rc::clone(&self.store),
        }
    }

    /// Run `f` with this provider active; [`use_app`] resolves to this
    /// provider's store for the duration (including on panic unwind).
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = ScopeGuard::enter(Rc::clone(&self.store));
        f()
    }
}

struct ScopeGuard;

impl ScopeGuard {
    fn enter(store: Rc<AppStore>) -> Self {
        ACTIVE.with(|stack| stack.borrow_mut().push(store));
        Self
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ACTIVE.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Get a handle to the innermost active provider's store.
///
/// # Panics
///
/// Panics when called outside an [`AppProvider::scope`]. This mirrors the
/// container's contract: components used outside the provider tree are a
/// bug, not a recoverable condition.
#[must_use]
pub fn use_app() -> AppHandle {
    ACTIVE.with(|stack| {
        stack.borrow().last().map_or_else(
            || panic!("use_app() called outside of an AppProvider scope"),
            |store| AppHandle {
                store: Rc::clone(store),
            },
        )
    })
}

/// Cloneable handle exposing the store's operations to a page.
#[derive(Clone)]
pub struct AppHandle {
    store: Rc<AppStore>,
}

impl AppHandle {
    /// Snapshot the current state.
    #[must_use]
    pub fn state(&self) -> AppState {
        self.store.state()
    }

    /// Read the current state without cloning.
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.store.with_state(f)
    }

    /// Apply a raw action.
    pub fn dispatch(&self, action: Action) {
        self.store.dispatch(action);
    }

    /// Add one unit of a product to the cart.
    pub fn add_to_cart(&self, product: Product) {
        self.store.add_to_cart(product);
    }

    /// Remove a product's line from the cart.
    pub fn remove_from_cart(&self, id: ProductId) {
        self.store.remove_from_cart(id);
    }

    /// Set a cart line's quantity; zero or below removes it.
    pub fn update_cart_quantity(&self, id: ProductId, quantity: i32) {
        self.store.update_cart_quantity(id, quantity);
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.store.clear_cart();
    }

    /// Save a product to the wishlist.
    pub fn add_to_wishlist(&self, product: Product) {
        self.store.add_to_wishlist(product);
    }

    /// Remove a product from the wishlist.
    pub fn remove_from_wishlist(&self, id: ProductId) {
        self.store.remove_from_wishlist(id);
    }

    /// Replace the search query.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.store.set_search_query(query);
    }

    /// Toggle the page-level busy flag.
    pub fn set_loading(&self, loading: bool) {
        self.store.set_loading(loading);
    }

    /// Set or clear the transient error message.
    pub fn set_error(&self, error: Option<String>) {
        self.store.set_error(error);
    }

    /// Start a session for the given user.
    pub fn login(&self, user: User) {
        self.store.login(user);
    }

    /// End the session. Cart and wishlist are left intact.
    pub fn logout(&self) {
        self.store.logout();
    }
}
