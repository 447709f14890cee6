//! The Order resource and its status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Payer, PurchaseUnit};

/// The payment intent of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Capture the payment immediately after buyer approval.
    #[default]
    Capture,
    /// Hold an authorization for later capture.
    Authorize,
}

/// The lifecycle status of an order.
///
/// Transitions are driven only by remote API responses; the status is never
/// set locally except by deserializing a PayPal response. The happy path is
/// `Created` -> (buyer approves out-of-band) -> `Approved` -> (capture) ->
/// `Completed`. `Voided` and `PayerActionRequired` are terminal/exception
/// branches reachable from any pre-`Completed` state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// The order was created and awaits buyer approval.
    Created,
    /// The order was saved for later processing.
    Saved,
    /// The buyer approved the order; it may now be captured.
    Approved,
    /// The order was voided and can no longer be processed.
    Voided,
    /// Payment was captured; the order is final.
    Completed,
    /// The buyer must take further action (e.g. 3-D Secure) before capture.
    PayerActionRequired,
}

impl OrderStatus {
    /// Returns true when this status equals `status`.
    #[must_use]
    pub fn is(self, status: Self) -> bool {
        self == status
    }

    /// Returns true when the order may be captured.
    #[must_use]
    pub fn is_approved(self) -> bool {
        self.is(Self::Approved)
    }

    /// Returns true when payment collection has been finalized.
    #[must_use]
    pub fn is_completed(self) -> bool {
        self.is(Self::Completed)
    }
}

/// Hints controlling the PayPal-hosted approval flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApplicationContext {
    /// Merchant name shown on the PayPal review page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    /// BCP-47 locale for the approval pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Landing page preference (`LOGIN`, `BILLING`, `NO_PREFERENCE`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_page: Option<String>,

    /// Shipping preference (`GET_FROM_FILE`, `NO_SHIPPING`,
    /// `SET_PROVIDED_ADDRESS`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_preference: Option<String>,

    /// Button label preference (`CONTINUE`, `PAY_NOW`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_action: Option<String>,

    /// Where the buyer is sent after approving.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// Where the buyer is sent after cancelling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

/// A PayPal order: the remote resource representing one checkout
/// transaction.
///
/// The crate holds a cached read/write-through copy of the most recent
/// remote state in an [`OrderSession`](crate::orders::OrderSession). The
/// cached copy is replaced, never merged, on every successful remote
/// operation: last known remote state wins.
///
/// `id` and `status` are required; a success response missing either fails
/// deserialization, which the [`OrderEndpoint`](crate::orders::OrderEndpoint)
/// surfaces as a malformed-response error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Opaque PayPal order id.
    pub id: String,

    /// Current lifecycle status, as last reported by PayPal.
    pub status: OrderStatus,

    /// The payment intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,

    /// Ordered sequence of purchase units.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purchase_units: Vec<PurchaseUnit>,

    /// The paying customer, once known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,

    /// Approval-flow hints sent at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_context: Option<ApplicationContext>,

    /// When PayPal created the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When PayPal last updated the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Amount, Item, Money};

    #[test]
    fn test_status_wire_format_is_screaming_snake() {
        assert_eq!(
            serde_json::to_value(OrderStatus::PayerActionRequired).unwrap(),
            "PAYER_ACTION_REQUIRED"
        );
        assert_eq!(
            serde_json::from_value::<OrderStatus>(serde_json::json!("APPROVED")).unwrap(),
            OrderStatus::Approved
        );
    }

    #[test]
    fn test_status_predicates() {
        assert!(OrderStatus::Approved.is_approved());
        assert!(!OrderStatus::Created.is_approved());
        assert!(OrderStatus::Completed.is_completed());
        assert!(OrderStatus::Voided.is(OrderStatus::Voided));
    }

    #[test]
    fn test_order_deserializes_with_only_required_fields() {
        let order: Order =
            serde_json::from_str(r#"{"id": "EC-123", "status": "CREATED"}"#).unwrap();

        assert_eq!(order.id, "EC-123");
        assert_eq!(order.status, OrderStatus::Created);
        assert!(order.purchase_units.is_empty());
        assert!(order.payer.is_none());
    }

    #[test]
    fn test_order_without_id_fails_to_deserialize() {
        let result = serde_json::from_str::<Order>(r#"{"status": "CREATED"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_without_status_fails_to_deserialize() {
        let result = serde_json::from_str::<Order>(r#"{"id": "EC-123"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_round_trips_supported_fields() {
        let order = Order {
            id: "5O190127TN364715T".to_string(),
            status: OrderStatus::Approved,
            intent: Some(Intent::Capture),
            purchase_units: vec![PurchaseUnit::new(Amount::new(
                "USD",
                "10.00".parse().unwrap(),
            ))
            .with_items(vec![Item::new(
                "Widget",
                Money::new("USD", "10.00".parse().unwrap()),
                1,
            )])
            .with_custom_id("wc-42")],
            payer: None,
            application_context: None,
            create_time: None,
            update_time: None,
        };

        let json = serde_json::to_value(&order).unwrap();
        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_intent_wire_format() {
        assert_eq!(serde_json::to_value(Intent::Capture).unwrap(), "CAPTURE");
        assert_eq!(serde_json::to_value(Intent::Authorize).unwrap(), "AUTHORIZE");
    }
}
