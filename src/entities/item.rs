//! Line item types for purchase units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Money;

/// PayPal item category classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    /// Goods that are physically shipped to the buyer.
    PhysicalGoods,
    /// Goods that are delivered electronically.
    DigitalGoods,
    /// A contribution or gift with nothing in return.
    Donation,
}

/// A single line item within a purchase unit.
///
/// PayPal transmits `quantity` as a string on the wire; it is stored as an
/// integer locally (see [`quantity_string`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// The item name shown to the buyer.
    pub name: String,

    /// Price of a single unit.
    pub unit_amount: Money,

    /// Number of units purchased.
    #[serde(with = "quantity_string")]
    pub quantity: u32,

    /// Tax charged for a single unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Category classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ItemCategory>,
}

impl Item {
    /// Creates an item with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, unit_amount: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_amount,
            quantity,
            tax: None,
            sku: None,
            category: None,
        }
    }

    /// Returns `unit_amount * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_amount.value * Decimal::from(self.quantity)
    }
}

/// Serde adapter for PayPal's string-encoded item quantity.
///
/// Accepts both `"2"` and `2` on input (some API surfaces return bare
/// numbers) but always emits a string.
mod quantity_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(quantity: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(quantity)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Num(u64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => s
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid item quantity '{s}'"))),
            Repr::Num(n) => u32::try_from(n)
                .map_err(|_| de::Error::custom(format!("item quantity {n} out of range"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item::new("Widget", Money::new("USD", "10.00".parse().unwrap()), 3)
    }

    #[test]
    fn test_quantity_serializes_as_string() {
        let json = serde_json::to_value(widget()).unwrap();
        assert_eq!(json["quantity"], "3");
    }

    #[test]
    fn test_quantity_deserializes_from_string_or_number() {
        let from_str: Item = serde_json::from_str(
            r#"{"name":"A","unit_amount":{"currency_code":"USD","value":"1.00"},"quantity":"2"}"#,
        )
        .unwrap();
        let from_num: Item = serde_json::from_str(
            r#"{"name":"A","unit_amount":{"currency_code":"USD","value":"1.00"},"quantity":2}"#,
        )
        .unwrap();

        assert_eq!(from_str.quantity, 2);
        assert_eq!(from_num.quantity, 2);
    }

    #[test]
    fn test_subtotal_multiplies_unit_amount_by_quantity() {
        assert_eq!(widget().subtotal(), "30.00".parse().unwrap());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let json = serde_json::to_value(widget()).unwrap();
        assert!(json.get("sku").is_none());
        assert!(json.get("category").is_none());
        assert!(json.get("tax").is_none());
    }

    #[test]
    fn test_category_wire_format() {
        let mut item = widget();
        item.category = Some(ItemCategory::PhysicalGoods);

        let json = serde_json::to_value(item).unwrap();
        assert_eq!(json["category"], "PHYSICAL_GOODS");
    }
}
