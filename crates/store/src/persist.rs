//! Persistence effect: hydration and synchronization.
//!
//! Cart, wishlist, and session are stored independently under stable keys.
//! Hydration is fail-open: a missing or unparseable entry falls back to
//! that field's default and never disturbs the other fields. Writes are
//! fire-and-forget; failures are logged and the in-memory state stays
//! authoritative for the session.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use kathsnap_core::{CartItem, Product, User};

use crate::state::AppState;
use crate::storage::StateStorage;

/// Storage keys for the persisted state fields.
pub mod keys {
    /// Key for the serialized cart lines.
    pub const CART: &str = "cart";

    /// Key for the serialized wishlist products.
    pub const WISHLIST: &str = "wishlist";

    /// Key for the serialized session user. Deleted while logged out
    /// rather than set to a null marker.
    pub const USER: &str = "user";
}

/// Build the startup state from whatever storage holds.
///
/// Each field loads independently; corruption in one entry cannot poison
/// the others.
pub(crate) fn hydrate(storage: &dyn StateStorage) -> AppState {
    AppState {
        cart: load::<Vec<CartItem>>(storage, keys::CART).unwrap_or_default(),
        wishlist: load::<Vec<Product>>(storage, keys::WISHLIST).unwrap_or_default(),
        user: load::<User>(storage, keys::USER),
        ..AppState::default()
    }
}

/// Re-serialize the persisted fields to storage.
///
/// The `user` key is removed while no session is active.
pub(crate) fn sync(state: &AppState, storage: &mut dyn StateStorage) {
    store(storage, keys::CART, &state.cart);
    store(storage, keys::WISHLIST, &state.wishlist);
    match &state.user {
        Some(user) => store(storage, keys::USER, user),
        None => {
            if let Err(e) = storage.remove(keys::USER) {
                error!(key = keys::USER, error = %e, "failed to remove persisted session");
            }
        }
    }
}

fn load<T: DeserializeOwned>(storage: &dyn StateStorage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read persisted state");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "discarding unparseable persisted state");
            None
        }
    }
}

fn store<T: Serialize>(storage: &mut dyn StateStorage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if let Err(e) = storage.set(key, &raw) {
                error!(key, error = %e, "failed to persist state");
            }
        }
        Err(e) => error!(key, error = %e, "failed to serialize state"),
    }
}
