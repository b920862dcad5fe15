//! Cart pricing and order placement.
//!
//! Pricing rules: 5% tax on the subtotal, a flat ₹50 shipping fee waived
//! above a ₹500 subtotal, and promo-code discounts applied to the subtotal.
//! Totals are computed with decimal arithmetic from the display prices on
//! the cart lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use kathsnap_core::{CartItem, OrderId, PaymentMethod, Phone, PhoneError, PriceError};
use kathsnap_store::AppState;

use crate::orders::{Order, OrderLine};

/// Known promo codes and their discount percentage.
const PROMO_PERCENTS: &[(&str, i64)] = &[("save10", 10)];

/// Subtotal above which shipping is free.
const FREE_SHIPPING_THRESHOLD: i64 = 500;

/// Flat shipping fee below the threshold.
const SHIPPING_FEE: i64 = 50;

/// Tax percentage applied to the subtotal.
const TAX_PERCENT: i64 = 5;

/// Errors from pricing and checkout.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Nothing in the cart to check out.
    #[error("cart is empty")]
    EmptyCart,

    /// A required delivery field is blank.
    #[error("missing required delivery field: {0}")]
    MissingField(&'static str),

    /// The delivery phone number does not parse.
    #[error("invalid delivery phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// The promo code is not recognized.
    #[error("invalid promo code: {0:?}")]
    InvalidPromo(String),

    /// A cart line's display price has no parseable amount.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// A recognized promo code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promo {
    code: String,
    percent: i64,
}

impl Promo {
    /// Look up a promo code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidPromo`] for unknown codes - a
    /// transient input failure the cart page surfaces and lets the shopper
    /// retype.
    pub fn parse(code: &str) -> Result<Self, CheckoutError> {
        let normalized = code.trim().to_lowercase();
        PROMO_PERCENTS
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|&(_, percent)| Self {
                code: normalized.clone(),
                percent,
            })
            .ok_or_else(|| CheckoutError::InvalidPromo(code.to_owned()))
    }

    /// The normalized code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Discount as a fraction of the subtotal (10% -> 0.10).
    #[must_use]
    pub fn rate(&self) -> Decimal {
        Decimal::new(self.percent, 2)
    }
}

/// The priced-out cart shown on the cart and checkout pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of unit price x quantity across lines.
    pub subtotal: Decimal,
    /// Promo discount taken off the subtotal.
    pub discount: Decimal,
    /// Shipping fee after the free-shipping rule.
    pub shipping: Decimal,
    /// Tax on the subtotal.
    pub tax: Decimal,
    /// What the shopper pays.
    pub total: Decimal,
}

impl CartTotals {
    /// Price out a cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Price`] if any line's display price has no
    /// parseable amount.
    pub fn compute(items: &[CartItem], promo: Option<&Promo>) -> Result<Self, CheckoutError> {
        let mut subtotal = Decimal::ZERO;
        for item in items {
            subtotal += item.product.price.amount()? * Decimal::from(item.quantity);
        }

        let tax = subtotal * Decimal::new(TAX_PERCENT, 2);
        let shipping = if subtotal > Decimal::from(FREE_SHIPPING_THRESHOLD) {
            Decimal::ZERO
        } else {
            Decimal::from(SHIPPING_FEE)
        };
        let discount = promo.map_or(Decimal::ZERO, |p| subtotal * p.rate());
        let total = subtotal + tax + shipping - discount;

        Ok(Self {
            subtotal,
            discount,
            shipping,
            tax,
            total,
        })
    }

    /// Whether the free-shipping rule applied.
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Price out the cart held in the application state.
///
/// What the cart page renders under the line items.
///
/// # Errors
///
/// Returns [`CheckoutError::Price`] if any line's display price has no
/// parseable amount.
pub fn cart_totals(state: &AppState, promo: Option<&Promo>) -> Result<CartTotals, CheckoutError> {
    CartTotals::compute(&state.cart, promo)
}

/// Delivery details collected on the checkout page.
///
/// `name`, `phone`, and `address` are required; `city` and `instructions`
/// are optional niceties for the rider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    /// Recipient name.
    pub name: String,
    /// Contact number for the rider, free-form.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City, optional.
    #[serde(default)]
    pub city: String,
    /// Delivery instructions, optional.
    #[serde(default)]
    pub instructions: String,
}

impl DeliveryDetails {
    /// Check the required fields and parse the contact number.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] naming the first blank
    /// required field, or [`CheckoutError::InvalidPhone`] when the number
    /// does not parse.
    pub fn validate(&self) -> Result<Phone, CheckoutError> {
        if self.name.trim().is_empty() {
            return Err(CheckoutError::MissingField("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(CheckoutError::MissingField("phone"));
        }
        if self.address.trim().is_empty() {
            return Err(CheckoutError::MissingField("address"));
        }
        Ok(Phone::parse(&self.phone)?)
    }
}

/// Turn the cart into a placed order.
///
/// Validates the delivery details and a non-empty cart, prices the lines,
/// and stamps the order with the current time in `Placed` status. The
/// caller assigns the order ID and owns clearing the cart afterwards.
///
/// # Errors
///
/// Returns a [`CheckoutError`] for an empty cart, incomplete delivery
/// details, or an unpriceable cart line.
pub fn place_order(
    id: OrderId,
    items: &[CartItem],
    delivery: &DeliveryDetails,
    payment: PaymentMethod,
    promo: Option<&Promo>,
) -> Result<Order, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    delivery.validate()?;

    let totals = CartTotals::compute(items, promo)?;
    let lines = items
        .iter()
        .map(OrderLine::from_cart_item)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(order = %id, total = %totals.total, lines = lines.len(), "placing order");

    Ok(Order::place(id, lines, delivery.clone(), payment, totals))
}
