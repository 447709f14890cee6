//! Purchase unit sanitation.
//!
//! Cart line items are computed from prices that may be rounded differently
//! than the authoritative order total (tax-inclusive pricing, per-line
//! rounding). PayPal rejects orders whose item subtotals do not add up to
//! the amount breakdown, so rather than failing checkout the sanitizer
//! adjusts the outbound representation according to a configurable policy.

use rust_decimal::Decimal;

use super::{AmountBreakdown, Item, Money, PurchaseUnit};

/// Policy applied when item totals disagree with the order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchBehavior {
    /// Drop line items and the breakdown; the amount total is authoritative.
    Ditch,
    /// Collapse the item list into a single correction line so the books
    /// balance.
    #[default]
    ExtraLine,
}

/// Reconciles purchase unit item totals with the authoritative amount.
///
/// A mismatch is logged and resolved, never surfaced as an error: silently
/// failing checkout is worse than a cosmetically adjusted line item.
///
/// # Example
///
/// ```rust
/// use paypal_checkout::entities::{
///     Amount, Item, MismatchBehavior, Money, PurchaseUnit, PurchaseUnitSanitizer,
/// };
///
/// let sanitizer = PurchaseUnitSanitizer::new(MismatchBehavior::Ditch, None);
///
/// // Items sum to 9.99 but the total says 10.00.
/// let unit = PurchaseUnit::new(Amount::new("USD", "10.00".parse().unwrap()))
///     .with_items(vec![Item::new(
///         "Widget",
///         Money::new("USD", "9.99".parse().unwrap()),
///         1,
///     )]);
///
/// let sanitized = sanitizer.sanitize(&unit);
/// assert!(sanitized.items.is_empty());
/// assert_eq!(sanitized.amount.value, "10.00".parse().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PurchaseUnitSanitizer {
    behavior: MismatchBehavior,
    line_name: String,
}

/// Label used for the correction line when none is configured.
const DEFAULT_LINE_NAME: &str = "Order total";

impl Default for PurchaseUnitSanitizer {
    fn default() -> Self {
        Self::new(MismatchBehavior::default(), None)
    }
}

impl PurchaseUnitSanitizer {
    /// Creates a sanitizer with the given policy and optional correction
    /// line label.
    #[must_use]
    pub fn new(behavior: MismatchBehavior, line_name: Option<String>) -> Self {
        Self {
            behavior,
            line_name: line_name.unwrap_or_else(|| DEFAULT_LINE_NAME.to_string()),
        }
    }

    /// Returns a copy of `unit` whose item totals are consistent with its
    /// amount, applying the configured mismatch policy when they are not.
    #[must_use]
    pub fn sanitize(&self, unit: &PurchaseUnit) -> PurchaseUnit {
        if unit.items.is_empty() && unit.amount.breakdown.is_none() {
            return unit.clone();
        }

        let item_subtotal: Decimal = unit.items.iter().map(Item::subtotal).sum();
        let non_item_total = non_item_components(unit.amount.breakdown.as_ref());
        let declared_item_total = unit
            .amount
            .breakdown
            .as_ref()
            .and_then(|b| b.item_total.as_ref())
            .map(|money| money.value);

        let totals_match = item_subtotal + non_item_total == unit.amount.value;
        let declared_matches = declared_item_total.map_or(true, |t| t == item_subtotal);
        if totals_match && declared_matches {
            return unit.clone();
        }

        tracing::warn!(
            amount = %unit.amount.value,
            item_subtotal = %item_subtotal,
            behavior = ?self.behavior,
            "purchase unit item totals disagree with order total, sanitizing"
        );

        let corrected_item_total = unit.amount.value - non_item_total;
        match self.behavior {
            MismatchBehavior::ExtraLine if corrected_item_total > Decimal::ZERO => {
                self.with_extra_line(unit, corrected_item_total)
            }
            // A non-positive corrected subtotal cannot be expressed as a
            // line item; fall back to ditching.
            _ => ditch(unit),
        }
    }

    fn with_extra_line(&self, unit: &PurchaseUnit, item_total: Decimal) -> PurchaseUnit {
        let currency = unit.amount.currency_code.clone();
        let mut sanitized = unit.clone();
        sanitized.items = vec![Item::new(
            self.line_name.clone(),
            Money::new(currency.clone(), item_total),
            1,
        )];

        let mut breakdown = unit.amount.breakdown.clone().unwrap_or_default();
        breakdown.item_total = Some(Money::new(currency, item_total));
        sanitized.amount.breakdown = Some(breakdown);
        sanitized
    }
}

/// Sums the breakdown components that are not part of the item subtotal.
fn non_item_components(breakdown: Option<&AmountBreakdown>) -> Decimal {
    let Some(breakdown) = breakdown else {
        return Decimal::ZERO;
    };
    let value = |money: &Option<Money>| money.as_ref().map_or(Decimal::ZERO, |m| m.value);

    value(&breakdown.shipping) + value(&breakdown.tax_total) + value(&breakdown.handling)
        + value(&breakdown.insurance)
        - value(&breakdown.discount)
        - value(&breakdown.shipping_discount)
}

fn ditch(unit: &PurchaseUnit) -> PurchaseUnit {
    let mut sanitized = unit.clone();
    sanitized.items = Vec::new();
    sanitized.amount.breakdown = None;
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Amount;

    fn money(value: &str) -> Money {
        Money::new("USD", value.parse().unwrap())
    }

    fn unit(total: &str, items: Vec<Item>, breakdown: Option<AmountBreakdown>) -> PurchaseUnit {
        let mut amount = Amount::new("USD", total.parse().unwrap());
        amount.breakdown = breakdown;
        PurchaseUnit::new(amount).with_items(items)
    }

    #[test]
    fn test_consistent_unit_is_untouched() {
        let original = unit(
            "12.00",
            vec![Item::new("Widget", money("5.00"), 2)],
            Some(AmountBreakdown {
                item_total: Some(money("10.00")),
                shipping: Some(money("2.00")),
                ..AmountBreakdown::default()
            }),
        );

        let sanitized = PurchaseUnitSanitizer::default().sanitize(&original);
        assert_eq!(sanitized, original);
    }

    #[test]
    fn test_unit_without_items_or_breakdown_is_untouched() {
        let original = unit("12.00", vec![], None);
        let sanitized = PurchaseUnitSanitizer::default().sanitize(&original);
        assert_eq!(sanitized, original);
    }

    #[test]
    fn test_ditch_drops_items_and_breakdown() {
        let sanitizer = PurchaseUnitSanitizer::new(MismatchBehavior::Ditch, None);
        let original = unit(
            "10.00",
            vec![Item::new("Widget", money("9.99"), 1)],
            Some(AmountBreakdown {
                item_total: Some(money("9.99")),
                ..AmountBreakdown::default()
            }),
        );

        let sanitized = sanitizer.sanitize(&original);
        assert!(sanitized.items.is_empty());
        assert!(sanitized.amount.breakdown.is_none());
        assert_eq!(sanitized.amount.value, original.amount.value);
    }

    #[test]
    fn test_extra_line_balances_the_books() {
        let sanitizer =
            PurchaseUnitSanitizer::new(MismatchBehavior::ExtraLine, Some("Cart".to_string()));
        let original = unit(
            "12.00",
            vec![Item::new("Widget", money("9.37"), 1)],
            Some(AmountBreakdown {
                item_total: Some(money("9.37")),
                shipping: Some(money("2.00")),
                ..AmountBreakdown::default()
            }),
        );

        let sanitized = sanitizer.sanitize(&original);

        // 12.00 total - 2.00 shipping = 10.00 corrected item subtotal.
        assert_eq!(sanitized.items.len(), 1);
        assert_eq!(sanitized.items[0].name, "Cart");
        assert_eq!(sanitized.items[0].quantity, 1);
        assert_eq!(sanitized.items[0].unit_amount.value, "10.00".parse().unwrap());

        let breakdown = sanitized.amount.breakdown.unwrap();
        assert_eq!(
            breakdown.item_total.unwrap().value,
            "10.00".parse().unwrap()
        );
        assert_eq!(breakdown.shipping.unwrap().value, "2.00".parse().unwrap());
    }

    #[test]
    fn test_extra_line_falls_back_to_ditch_when_subtotal_not_positive() {
        let sanitizer = PurchaseUnitSanitizer::new(MismatchBehavior::ExtraLine, None);
        let original = unit(
            "2.00",
            vec![Item::new("Widget", money("9.99"), 1)],
            Some(AmountBreakdown {
                item_total: Some(money("9.99")),
                shipping: Some(money("3.00")),
                ..AmountBreakdown::default()
            }),
        );

        // 2.00 - 3.00 shipping would require a -1.00 item line.
        let sanitized = sanitizer.sanitize(&original);
        assert!(sanitized.items.is_empty());
        assert!(sanitized.amount.breakdown.is_none());
    }

    #[test]
    fn test_declared_item_total_mismatch_triggers_sanitation() {
        let sanitizer = PurchaseUnitSanitizer::new(MismatchBehavior::Ditch, None);
        // Items sum to 10.00 and total is 10.00, but the declared
        // item_total says 9.00.
        let original = unit(
            "10.00",
            vec![Item::new("Widget", money("10.00"), 1)],
            Some(AmountBreakdown {
                item_total: Some(money("9.00")),
                ..AmountBreakdown::default()
            }),
        );

        let sanitized = sanitizer.sanitize(&original);
        assert!(sanitized.items.is_empty());
    }
}
