//! Catalog entry types.
//!
//! Products and vendors are plain data supplied by the catalog source. The
//! serialized form uses camelCase keys with absent optionals omitted, which
//! is the layout the persisted cart and wishlist entries carry.

use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, VendorId};
use crate::types::price::Price;

/// A catalog entry. Immutable once displayed; cart and wishlist entries
/// reference it by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Name of the vendor selling this product.
    pub vendor: String,
    /// Display price, e.g. `"₹150/kg"`.
    pub price: Price,
    /// Image reference (path or URL).
    pub image: String,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Average rating, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Long-form description, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category label, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A vendor profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Unique vendor ID.
    pub id: VendorId,
    /// Vendor display name.
    pub name: String,
    /// Image reference (path or URL).
    pub image: String,
    /// Average rating.
    pub rating: f32,
    /// Display distance from the shopper, e.g. `"1.2 km"`.
    pub distance: String,
    /// Estimated delivery window, e.g. `"30-45 mins"`.
    pub delivery_time: String,
    /// Categories this vendor sells in.
    pub categories: Vec<String>,
    /// Long-form description, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(4),
            name: "Coffee Beans".to_owned(),
            vendor: "Brew Masters".to_owned(),
            price: Price::new("₹450"),
            image: "/placeholder-coffee.jpg".to_owned(),
            in_stock: true,
            rating: None,
            description: None,
            category: Some("Grocery".to_owned()),
        }
    }

    #[test]
    fn test_wire_format_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["inStock"], serde_json::json!(true));
        assert_eq!(json["price"], serde_json::json!("₹450"));
        // absent optionals are omitted, not null
        assert!(json.get("rating").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_deserialize_without_optionals() {
        let json = r#"{
            "id": 1,
            "name": "Organic Apples",
            "vendor": "Farm Fresh",
            "price": "₹150/kg",
            "image": "/placeholder-apple.jpg",
            "inStock": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert!(product.rating.is_none());
        assert!(product.category.is_none());
    }

    #[test]
    fn test_vendor_wire_format() {
        let vendor = Vendor {
            id: VendorId::new(2),
            name: "Fresh Farm Valley".to_owned(),
            image: "/vendors/fresh-farm.jpg".to_owned(),
            rating: 4.8,
            distance: "1.2 km".to_owned(),
            delivery_time: "30-45 mins".to_owned(),
            categories: vec!["Vegetables".to_owned(), "Dairy".to_owned()],
            description: None,
        };
        let json = serde_json::to_value(&vendor).unwrap();
        assert_eq!(json["deliveryTime"], serde_json::json!("30-45 mins"));
    }
}
