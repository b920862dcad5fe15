//! KathSnap Core - Shared types library.
//!
//! This crate provides the domain types used across all KathSnap components:
//! - `store` - Application state container (cart, wishlist, session)
//! - `storefront` - Shopper-facing services (catalog, checkout, orders)
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and contact
//!   fields, plus the plain-data catalog and session shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
