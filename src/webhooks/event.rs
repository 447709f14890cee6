//! Webhook event envelope and acknowledgement types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A webhook event delivered by PayPal.
///
/// The `resource` payload is kept as raw JSON: its shape depends entirely
/// on `event_type`, and each handler extracts what it needs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WebhookEvent {
    /// PayPal's id for this delivery.
    #[serde(default)]
    pub id: Option<String>,

    /// The event type (e.g. `VAULT.PAYMENT-TOKEN.CREATED`).
    pub event_type: String,

    /// The event payload, shape varying by event type.
    #[serde(default)]
    pub resource: serde_json::Value,

    /// When the event occurred at PayPal.
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
}

/// The outcome of handling a webhook event.
///
/// Regardless of `success`, the HTTP response to PayPal is always a 2xx
/// acknowledgement: a non-2xx would only trigger redelivery of an event
/// that will fail the same way again. `success` and `message` exist for
/// logs and for surfacing the outcome in a response body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebhookAck {
    /// Whether the event was handled without issue.
    pub success: bool,

    /// Diagnostic message when handling failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WebhookAck {
    /// A successful acknowledgement.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A failed acknowledgement carrying a diagnostic message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_a_vault_event() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "id": "WH-82L817751G970921V",
            "event_type": "VAULT.PAYMENT-TOKEN.CREATED",
            "create_time": "2024-03-01T12:00:00Z",
            "resource": {"customer_id": "ppcp-42"}
        }))
        .unwrap();

        assert_eq!(event.event_type, "VAULT.PAYMENT-TOKEN.CREATED");
        assert_eq!(event.resource["customer_id"], "ppcp-42");
    }

    #[test]
    fn test_event_type_is_required() {
        let result: Result<WebhookEvent, _> =
            serde_json::from_value(json!({"id": "WH-1", "resource": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_failed_ack_serializes_its_message() {
        let body = serde_json::to_value(WebhookAck::failed("no customer id")).unwrap();
        assert_eq!(body, json!({"success": false, "message": "no customer id"}));
    }

    #[test]
    fn test_ok_ack_omits_the_message_field() {
        let body = serde_json::to_value(WebhookAck::ok()).unwrap();
        assert_eq!(body, json!({"success": true}));
    }
}
