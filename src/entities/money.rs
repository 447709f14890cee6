//! Money and amount types.
//!
//! PayPal represents monetary values as decimal strings on the wire
//! (never floats). Internally values are stored as [`rust_decimal::Decimal`]
//! to avoid rounding error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary value in a single currency.
///
/// The `value` field is serialized as a decimal string (e.g. `"10.00"`),
/// matching the PayPal wire format.
///
/// # Example
///
/// ```rust
/// use paypal_checkout::entities::Money;
/// use rust_decimal::Decimal;
///
/// let money = Money::new("USD", Decimal::new(1000, 2));
/// let json = serde_json::to_value(&money).unwrap();
/// assert_eq!(json["currency_code"], "USD");
/// assert_eq!(json["value"], "10.00");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    /// The three-letter ISO 4217 currency code.
    pub currency_code: String,

    /// The amount, serialized as a decimal string.
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

impl Money {
    /// Creates a new money value.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency_code: currency_code.into(),
            value,
        }
    }
}

/// Itemized breakdown of an [`Amount`].
///
/// All components are optional; absent components are omitted from the
/// wire representation rather than sent as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AmountBreakdown {
    /// Subtotal of all items (`unit_amount * quantity` summed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_total: Option<Money>,

    /// Shipping fee for the purchase unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Money>,

    /// Total tax for the purchase unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_total: Option<Money>,

    /// Handling fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling: Option<Money>,

    /// Insurance fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Money>,

    /// Discount applied to the items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Money>,

    /// Discount applied to shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_discount: Option<Money>,
}

/// The total amount of a purchase unit, with an optional itemized breakdown.
///
/// Invariant: when a breakdown is present, its positive components minus
/// its discount components must sum to `value`. Mismatches are resolved by
/// [`PurchaseUnitSanitizer`](crate::entities::PurchaseUnitSanitizer) before
/// an order is sent to PayPal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amount {
    /// The three-letter ISO 4217 currency code.
    pub currency_code: String,

    /// The total, serialized as a decimal string.
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,

    /// Optional itemized breakdown of the total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<AmountBreakdown>,
}

impl Amount {
    /// Creates an amount without a breakdown.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency_code: currency_code.into(),
            value,
            breakdown: None,
        }
    }

    /// Attaches an itemized breakdown.
    #[must_use]
    pub fn with_breakdown(mut self, breakdown: AmountBreakdown) -> Self {
        self.breakdown = Some(breakdown);
        self
    }

    /// Returns the total as a [`Money`] value.
    #[must_use]
    pub fn money(&self) -> Money {
        Money::new(self.currency_code.clone(), self.value)
    }
}
