//! KathSnap Store - the application state container.
//!
//! Single source of truth for the shopper's cart, wishlist, session, and
//! search query. Pages never mutate state directly: they dispatch actions
//! (or call the intention-revealing helpers) against an [`AppStore`], which
//! applies a pure reducer and then synchronizes the cart, wishlist, and
//! session to a key-value [`storage`] backend. On startup the store
//! hydrates from the same backend, falling back field-by-field to defaults
//! when a stored value is missing or unparseable.
//!
//! # Architecture
//!
//! - [`reducer::reduce`] - pure `(state, action) -> state`, no side effects
//! - [`storage`] - `StateStorage` trait with in-memory and file backends
//! - [`AppStore`] - owns the state and the backend; `dispatch` runs the
//!   reducer then the persistence effect
//! - [`AppProvider`] / [`use_app`] - scoped access for page components;
//!   calling [`use_app`] outside a provider scope fails fast
//!
//! All mutations happen synchronously on one thread; the store serializes
//! state changes through the single dispatch path, so there is no writer
//! race to guard against.
//!
//! # Example
//!
//! ```
//! use kathsnap_store::{AppStore, storage::MemoryStorage};
//! # use kathsnap_core::{Price, Product, ProductId};
//! # fn product() -> Product {
//! #     Product {
//! #         id: ProductId::new(1),
//! #         name: "Organic Apples".into(),
//! #         vendor: "Farm Fresh".into(),
//! #         price: Price::new("₹150/kg"),
//! #         image: "/apples.jpg".into(),
//! #         in_stock: true,
//! #         rating: None,
//! #         description: None,
//! #         category: None,
//! #     }
//! # }
//!
//! let store = AppStore::open(MemoryStorage::new());
//! store.add_to_cart(product());
//! store.add_to_cart(product());
//! assert_eq!(store.state().cart_count(), 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod config;
pub mod persist;
pub mod provider;
pub mod reducer;
pub mod state;
pub mod storage;
pub mod store;

pub use action::Action;
pub use config::{ConfigError, StoreConfig};
pub use persist::keys;
pub use provider::{AppHandle, AppProvider, use_app};
pub use state::AppState;
pub use store::AppStore;
