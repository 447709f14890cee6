//! Purchase unit: one cart's worth of items, amount and shipping.

use serde::{Deserialize, Serialize};

use super::{Amount, Item, Payments, Shipping};

/// One shopping-cart-equivalent grouping within an order.
///
/// Invariant: the sum of item subtotals plus the breakdown's
/// shipping/tax/discount components must equal `amount.value`. Mismatches
/// are resolved by [`PurchaseUnitSanitizer`](super::PurchaseUnitSanitizer)
/// before the unit is sent to PayPal.
///
/// # Example
///
/// ```rust
/// use paypal_checkout::entities::{Amount, Item, Money, PurchaseUnit};
///
/// let unit = PurchaseUnit::new(Amount::new("USD", "10.00".parse().unwrap()))
///     .with_items(vec![Item::new(
///         "Widget",
///         Money::new("USD", "10.00".parse().unwrap()),
///         1,
///     )]);
///
/// assert_eq!(unit.items.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseUnit {
    /// Merchant-assigned id distinguishing units within one order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// Total amount with optional breakdown.
    pub amount: Amount,

    /// Ordered sequence of line items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,

    /// Shipping address and options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,

    /// Merchant-defined id echoed back in payment records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,

    /// Merchant-defined invoice id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,

    /// Descriptor shown on the buyer's card statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_descriptor: Option<String>,

    /// Payment records attached after capture or authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Payments>,
}

impl PurchaseUnit {
    /// Creates a purchase unit with the given amount and nothing else.
    #[must_use]
    pub const fn new(amount: Amount) -> Self {
        Self {
            reference_id: None,
            amount,
            items: Vec::new(),
            shipping: None,
            custom_id: None,
            invoice_id: None,
            soft_descriptor: None,
            payments: None,
        }
    }

    /// Sets the line items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Sets the shipping details.
    #[must_use]
    pub fn with_shipping(mut self, shipping: Shipping) -> Self {
        self.shipping = Some(shipping);
        self
    }

    /// Sets the custom id.
    #[must_use]
    pub fn with_custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }
}
