//! Status enums for orders and payments.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The wire form is kebab-case (`"in-transit"`), matching the order history
/// data the pages filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order accepted, not yet handed to a rider.
    #[default]
    Placed,
    /// Out for delivery.
    InTransit,
    /// Delivered to the shopper.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl OrderStatus {
    /// Whether the order can still change state.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Placed | Self::InTransit)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Placed => write!(f, "placed"),
            Self::InTransit => write!(f, "in-transit"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(Self::Placed),
            "in-transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// How the shopper pays at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// Cash on delivery.
    Cash,
    /// Digital wallet.
    Wallet,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Cash => write!(f, "cash"),
            Self::Wallet => write!(f, "wallet"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_form() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InTransit).unwrap(),
            "\"in-transit\""
        );
        let back: OrderStatus = serde_json::from_str("\"in-transit\"").unwrap();
        assert_eq!(back, OrderStatus::InTransit);
    }

    #[test]
    fn test_order_status_display_parse_roundtrip() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::InTransit,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_order_status_parse_invalid() {
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_is_active() {
        assert!(OrderStatus::Placed.is_active());
        assert!(OrderStatus::InTransit.is_active());
        assert!(!OrderStatus::Delivered.is_active());
        assert!(!OrderStatus::Cancelled.is_active());
    }

    #[test]
    fn test_payment_method_wire_form() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Wallet).unwrap(),
            "\"wallet\""
        );
    }
}
