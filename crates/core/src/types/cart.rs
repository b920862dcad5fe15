//! Cart line type.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::product::Product;

/// A product in the cart together with its quantity.
///
/// Serializes flat: the product fields and `quantity` are siblings, matching
/// the persisted cart layout. The cart holds at most one `CartItem` per
/// product ID, and `quantity` is at least 1 while the item is present — the
/// reducer removes items instead of storing a zero quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product being purchased.
    #[serde(flatten)]
    pub product: Product,
    /// Units of the product, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Wrap a product as a single-unit cart line.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The ID of the underlying product.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::price::Price;

    fn sample_item() -> CartItem {
        CartItem {
            product: Product {
                id: ProductId::new(1),
                name: "Organic Tomatoes".to_owned(),
                vendor: "Fresh Farm Valley".to_owned(),
                price: Price::new("₹80"),
                image: "/tomatoes.jpg".to_owned(),
                in_stock: true,
                rating: None,
                description: None,
                category: None,
            },
            quantity: 2,
        }
    }

    #[test]
    fn test_new_starts_at_one() {
        let item = CartItem::new(sample_item().product);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(sample_item()).unwrap();
        // product fields and quantity are siblings, not nested
        assert_eq!(json["name"], serde_json::json!("Organic Tomatoes"));
        assert_eq!(json["quantity"], serde_json::json!(2));
        assert!(json.get("product").is_none());
    }

    #[test]
    fn test_deserializes_flat() {
        let json = r#"{
            "id": 1,
            "name": "Organic Tomatoes",
            "vendor": "Fresh Farm Valley",
            "price": "₹80",
            "image": "/tomatoes.jpg",
            "inStock": true,
            "quantity": 3
        }"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id(), ProductId::new(1));
        assert_eq!(item.quantity, 3);
    }
}
