//! Integration tests for KathSnap.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p kathsnap-integration-tests
//! ```
//!
//! Set `RUST_LOG=kathsnap_store=debug` to see store dispatch and
//! persistence logging while a test runs.
//!
//! # Test Categories
//!
//! - `store_persistence` - hydration, storage sync, corruption recovery
//! - `shopper_flow` - provider-scoped end-to-end shopper scenarios

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

use kathsnap_core::{Email, Phone, Price, Product, ProductId, User, UserId, Vendor, VendorId};

static TRACING: Once = Once::new();

/// Initialize test logging once, honoring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A product fixture with the given id, name, vendor, and display price.
#[must_use]
pub fn product(id: i32, name: &str, vendor: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        vendor: vendor.to_owned(),
        price: Price::new(price),
        image: format!("/images/{id}.jpg"),
        in_stock: true,
        rating: None,
        description: None,
        category: None,
    }
}

/// A logged-in user fixture.
///
/// # Panics
///
/// Panics if the hard-coded fixture contact fields stop parsing.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn user(name: &str) -> User {
    User {
        id: UserId::generate(),
        name: name.to_owned(),
        email: Email::parse("shopper@example.com").unwrap(),
        phone: Phone::parse("+977 9841234567").unwrap(),
        avatar: None,
        is_logged_in: true,
    }
}

/// The small catalog the shopper-flow tests browse.
#[must_use]
pub fn sample_catalog() -> (Vec<Product>, Vec<Vendor>) {
    let mut apples = product(1, "Organic Apples", "Farm Fresh", "₹150/kg");
    apples.category = Some("Grocery".to_owned());

    let mut earbuds = product(2, "Wireless Earbuds", "Tech Gadgets", "₹1999");
    earbuds.category = Some("Electronics".to_owned());

    let mut coffee = product(3, "Coffee Beans", "Brew Masters", "₹450");
    coffee.category = Some("Grocery".to_owned());

    let vendors = vec![Vendor {
        id: VendorId::new(1),
        name: "Farm Fresh".to_owned(),
        image: "/vendors/farm-fresh.jpg".to_owned(),
        rating: 4.8,
        distance: "1.2 km".to_owned(),
        delivery_time: "30-45 mins".to_owned(),
        categories: vec!["Grocery".to_owned()],
        description: None,
    }];

    (vec![apples, earbuds, coffee], vendors)
}
