//! Shipping and address types.

use serde::{Deserialize, Serialize};

use super::Money;

/// A postal address in PayPal's portable format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Address {
    /// Street address, line 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,

    /// Street address, line 2 (apartment, suite, unit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,

    /// City or town.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_area_2: Option<String>,

    /// State, province or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_area_1: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Two-letter ISO 3166-1 country code.
    pub country_code: String,
}

/// The name attached to a shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShippingName {
    /// Full name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// One selectable shipping option on a purchase unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingOption {
    /// Merchant-defined option id.
    pub id: String,

    /// Label shown to the buyer.
    pub label: String,

    /// Whether this option is the currently selected one. Exactly one
    /// option in the sequence may be selected.
    pub selected: bool,

    /// Cost of this option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

/// Shipping details of a purchase unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Shipping {
    /// Recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ShippingName>,

    /// Delivery address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Ordered sequence of shipping options; at most one is selected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ShippingOption>,
}

impl Shipping {
    /// Returns the currently selected shipping option, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&ShippingOption> {
        self.options.iter().find(|option| option.selected)
    }
}
