//! Order history model.
//!
//! Orders move placed -> in-transit -> delivered, with cancellation allowed
//! any time before delivery. The history page filters by an optional
//! status tab.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kathsnap_core::{CartItem, OrderId, OrderStatus, PaymentMethod, PriceError};

use crate::checkout::{CartTotals, DeliveryDetails};

/// Errors from order state changes.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderError {
    /// The requested status change is not allowed from the current status.
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition {
        /// Status the order is in.
        from: OrderStatus,
        /// Status that was requested.
        to: OrderStatus,
    },
}

/// One purchased line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Product name at purchase time.
    pub name: String,
    /// Vendor name at purchase time.
    pub vendor: String,
    /// Units purchased.
    pub quantity: u32,
    /// Unit price at purchase time.
    pub unit_price: Decimal,
}

impl OrderLine {
    /// Capture a cart line as an order line.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the cart line's display price has no
    /// parseable amount.
    pub fn from_cart_item(item: &CartItem) -> Result<Self, PriceError> {
        Ok(Self {
            name: item.product.name.clone(),
            vendor: item.product.vendor.clone(),
            quantity: item.quantity,
            unit_price: item.product.price.amount()?,
        })
    }

    /// Price of this line (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A placed order, as shown in the history page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Purchased lines.
    pub items: Vec<OrderLine>,
    /// Where the order is going.
    pub delivery: DeliveryDetails,
    /// How the shopper paid.
    pub payment: PaymentMethod,
    /// The totals agreed at checkout.
    pub totals: CartTotals,
}

impl Order {
    /// Create a freshly placed order stamped with the current time.
    #[must_use]
    pub fn place(
        id: OrderId,
        items: Vec<OrderLine>,
        delivery: DeliveryDetails,
        payment: PaymentMethod,
        totals: CartTotals,
    ) -> Self {
        Self {
            id,
            placed_at: Utc::now(),
            status: OrderStatus::Placed,
            items,
            delivery,
            payment,
            totals,
        }
    }

    /// Display reference, e.g. `ORD-007`.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("ORD-{:03}", self.id.as_i32())
    }

    /// Hand the order to a rider.
    ///
    /// # Errors
    ///
    /// Only a `Placed` order can go in transit.
    pub fn mark_in_transit(&mut self) -> Result<(), OrderError> {
        self.transition(OrderStatus::Placed, OrderStatus::InTransit)
    }

    /// Record delivery to the shopper.
    ///
    /// # Errors
    ///
    /// Only an `InTransit` order can be delivered.
    pub fn mark_delivered(&mut self) -> Result<(), OrderError> {
        self.transition(OrderStatus::InTransit, OrderStatus::Delivered)
    }

    /// Cancel the order.
    ///
    /// # Errors
    ///
    /// Delivered and already-cancelled orders cannot be cancelled.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        if self.status.is_active() {
            self.status = OrderStatus::Cancelled;
            Ok(())
        } else {
            Err(OrderError::InvalidTransition {
                from: self.status,
                to: OrderStatus::Cancelled,
            })
        }
    }

    fn transition(&mut self, expect: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        if self.status == expect {
            self.status = to;
            Ok(())
        } else {
            Err(OrderError::InvalidTransition {
                from: self.status,
                to,
            })
        }
    }
}

/// Orders matching a history tab (`None` = the "all" tab), newest first
/// not imposed - input order is preserved.
#[must_use]
pub fn filter_by_status(orders: &[Order], status: Option<OrderStatus>) -> Vec<&Order> {
    orders
        .iter()
        .filter(|order| status.is_none_or(|s| order.status == s))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(name: &str, quantity: u32, unit_price: i64) -> OrderLine {
        OrderLine {
            name: name.to_owned(),
            vendor: "Vendor".to_owned(),
            quantity,
            unit_price: Decimal::from(unit_price),
        }
    }

    fn order(id: i32) -> Order {
        Order::place(
            OrderId::new(id),
            vec![line("Organic Tomatoes", 2, 80)],
            DeliveryDetails {
                name: "Asha".to_owned(),
                phone: "9841234567".to_owned(),
                address: "Thamel, Kathmandu".to_owned(),
                city: "Kathmandu".to_owned(),
                instructions: String::new(),
            },
            PaymentMethod::Card,
            CartTotals {
                subtotal: Decimal::from(160),
                discount: Decimal::ZERO,
                shipping: Decimal::from(50),
                tax: Decimal::from(8),
                total: Decimal::from(218),
            },
        )
    }

    #[test]
    fn test_reference_padding() {
        assert_eq!(order(1).reference(), "ORD-001");
        assert_eq!(order(412).reference(), "ORD-412");
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line("x", 3, 80).line_total(), Decimal::from(240));
    }

    #[test]
    fn test_happy_path_transitions() {
        let mut order = order(1);
        order.mark_in_transit().unwrap();
        order.mark_delivered().unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_cannot_deliver_before_transit() {
        let mut order = order(1);
        assert!(matches!(
            order.mark_delivered(),
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Placed,
                to: OrderStatus::Delivered,
            })
        ));
    }

    #[test]
    fn test_cancel_before_delivery() {
        let mut order = order(1);
        order.mark_in_transit().unwrap();
        order.cancel().unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_cannot_cancel_delivered_order() {
        let mut order = order(1);
        order.mark_in_transit().unwrap();
        order.mark_delivered().unwrap();
        assert!(order.cancel().is_err());
    }

    #[test]
    fn test_cancelled_order_is_terminal() {
        let mut order = order(1);
        order.cancel().unwrap();
        assert!(order.mark_in_transit().is_err());
        assert!(order.cancel().is_err());
    }

    #[test]
    fn test_filter_by_status_tabs() {
        let mut delivered = order(1);
        delivered.mark_in_transit().unwrap();
        delivered.mark_delivered().unwrap();

        let mut in_transit = order(2);
        in_transit.mark_in_transit().unwrap();

        let mut cancelled = order(3);
        cancelled.cancel().unwrap();

        let orders = vec![delivered, in_transit, cancelled];

        assert_eq!(filter_by_status(&orders, None).len(), 3);
        let hits = filter_by_status(&orders, Some(OrderStatus::Delivered));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, OrderId::new(1));
        assert_eq!(
            filter_by_status(&orders, Some(OrderStatus::Placed)).len(),
            0
        );
    }
}
