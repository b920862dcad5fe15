//! Display-oriented price representation.
//!
//! Catalog prices arrive as display strings the way vendors enter them
//! (`"₹80"`, `"₹150/kg"`, `"₹1999"`). The string form is what pages render
//! and what gets persisted, so [`Price`] keeps it verbatim and parses the
//! numeric amount on demand for totals arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency symbol used across the storefront.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Errors that can occur when reading the numeric amount of a [`Price`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum PriceError {
    /// The display string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The display string has no parseable numeric amount.
    #[error("price has no numeric amount: {0:?}")]
    InvalidAmount(String),
}

/// A product price as displayed, e.g. `"₹150/kg"`.
///
/// The wrapped string is the source of truth; [`Price::amount`] extracts the
/// numeric part by stripping the currency symbol prefix and any `/unit`
/// suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Wrap a display string as a price.
    #[must_use]
    pub fn new(display: impl Into<String>) -> Self {
        Self(display.into())
    }

    /// Format a numeric amount as a display price (`"₹281.00"`).
    #[must_use]
    pub fn from_amount(amount: Decimal) -> Self {
        Self(format!("{CURRENCY_SYMBOL}{amount:.2}"))
    }

    /// The display string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the numeric amount out of the display string.
    ///
    /// Strips a leading currency symbol and a trailing `/unit` qualifier, so
    /// `"₹150/kg"` yields `150`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Empty`] for a blank string and
    /// [`PriceError::InvalidAmount`] when no number remains after stripping.
    pub fn amount(&self) -> Result<Decimal, PriceError> {
        let raw = self.0.trim();
        if raw.is_empty() {
            return Err(PriceError::Empty);
        }

        // "₹150/kg" -> "₹150"
        let raw = raw.split('/').next().unwrap_or(raw);
        // "₹150" -> "150"; also tolerates "$" and bare numbers
        let raw = raw.trim_start_matches(|c: char| !(c.is_ascii_digit() || c == '-' || c == '.'));

        raw.parse::<Decimal>()
            .map_err(|_| PriceError::InvalidAmount(self.0.clone()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Price {
    fn from(display: &str) -> Self {
        Self::new(display)
    }
}

impl From<String> for Price {
    fn from(display: String) -> Self {
        Self::new(display)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_plain() {
        assert_eq!(Price::new("₹1999").amount().unwrap(), Decimal::from(1999));
    }

    #[test]
    fn test_amount_with_unit_suffix() {
        assert_eq!(Price::new("₹150/kg").amount().unwrap(), Decimal::from(150));
    }

    #[test]
    fn test_amount_fractional() {
        assert_eq!(
            Price::new("₹79.50").amount().unwrap(),
            "79.50".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_amount_without_symbol() {
        assert_eq!(Price::new("60").amount().unwrap(), Decimal::from(60));
    }

    #[test]
    fn test_amount_empty() {
        assert!(matches!(Price::new("").amount(), Err(PriceError::Empty)));
        assert!(matches!(Price::new("  ").amount(), Err(PriceError::Empty)));
    }

    #[test]
    fn test_amount_not_numeric() {
        assert!(matches!(
            Price::new("free").amount(),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_from_amount_formats_two_decimals() {
        let price = Price::from_amount(Decimal::from(281));
        assert_eq!(price.as_str(), "₹281.00");
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::new("₹450");
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"₹450\"");
        let back: Price = serde_json::from_str("\"₹450\"").unwrap();
        assert_eq!(back, price);
    }
}
