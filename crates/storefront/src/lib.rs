//! KathSnap Storefront - shopper-facing services.
//!
//! Pure domain logic behind the shopper pages: catalog search, cart
//! pricing and promo codes, checkout, and order history. Everything here
//! operates on plain values from `kathsnap-core` and state read from
//! `kathsnap-store`; there is no rendering and no I/O.
//!
//! # Modules
//!
//! - [`catalog`] - product lookup and search over supplied catalog data
//! - [`checkout`] - cart totals, promo codes, delivery details, placing
//!   an order
//! - [`orders`] - the order model, status transitions, history filtering
//! - [`account`] - signup/login form validation producing session users

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod account;
pub mod catalog;
pub mod checkout;
pub mod orders;

pub use account::{AccountError, LoginForm, SignupForm};
pub use catalog::{Catalog, CatalogError, SearchQuery};
pub use checkout::{CartTotals, CheckoutError, DeliveryDetails, Promo, cart_totals, place_order};
pub use orders::{Order, OrderError, OrderLine};
