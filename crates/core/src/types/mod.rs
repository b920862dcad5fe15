//! Core types for KathSnap.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod phone;
pub mod price;
pub mod product;
pub mod status;
pub mod user;

pub use cart::CartItem;
pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{Phone, PhoneError};
pub use price::{Price, PriceError};
pub use product::{Product, Vendor};
pub use status::{OrderStatus, PaymentMethod};
pub use user::{User, UserId};
