//! Catalog lookup and search.
//!
//! The catalog is supplied as plain data by the page-level source; this
//! module never fetches or validates content. Search is a case-insensitive
//! substring match over product name, vendor, and category, preserving
//! catalog order.

use kathsnap_core::{Product, ProductId, Vendor, VendorId};

/// Errors from catalog operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// The search query is empty or whitespace.
    #[error("search query cannot be empty")]
    EmptyQuery,
}

/// A validated, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Parse a query from the search box.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyQuery`] for empty or whitespace-only
    /// input. That is a transient user-input failure to surface and retry,
    /// never a crash.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyQuery);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// The normalized (lowercased) query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// In-memory catalog the storefront pages read from.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    vendors: Vec<Vendor>,
}

impl Catalog {
    /// Build a catalog from supplied data.
    #[must_use]
    pub const fn new(products: Vec<Product>, vendors: Vec<Vendor>) -> Self {
        Self { products, vendors }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All vendors.
    #[must_use]
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a vendor by ID.
    #[must_use]
    pub fn vendor(&self, id: VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    /// Products matching the query by name, vendor, or category.
    ///
    /// Matching is case-insensitive substring; results keep catalog order.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<&Product> {
        let needle = query.as_str();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(needle)
                    || p.vendor.to_lowercase().contains(needle)
                    || p.category
                        .as_ref()
                        .is_some_and(|c| c.to_lowercase().contains(needle))
            })
            .collect()
    }

    /// Products in a category, catalog order.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                p.category
                    .as_ref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
            })
            .collect()
    }

    /// Products currently in stock, catalog order.
    #[must_use]
    pub fn in_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.in_stock).collect()
    }
}
