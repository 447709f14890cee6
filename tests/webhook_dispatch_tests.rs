//! Integration tests for webhook routing end to end: raw delivery JSON in,
//! acknowledgement out.

use std::sync::{Arc, Mutex};

use serde_json::json;

use paypal_checkout::webhooks::{
    AuthorizedPayments, HandlerError, VaultPaymentTokenCreated, WebhookDispatcher, WebhookEvent,
};
use paypal_checkout::{BoxFuture, MerchantPrefix};

#[derive(Default)]
struct RecordingProcessor {
    captured: Mutex<Vec<u64>>,
}

impl AuthorizedPayments for RecordingProcessor {
    fn capture_authorized_payments_for_customer(
        &self,
        customer_id: u64,
    ) -> BoxFuture<'_, Result<(), HandlerError>> {
        self.captured.lock().unwrap().push(customer_id);
        Box::pin(async { Ok(()) })
    }
}

fn dispatcher(processor: Arc<RecordingProcessor>) -> WebhookDispatcher {
    WebhookDispatcher::new().register(Box::new(VaultPaymentTokenCreated::new(
        MerchantPrefix::default(),
        processor,
    )))
}

#[tokio::test]
async fn vault_token_delivery_triggers_capture_of_authorized_payments() {
    let processor = Arc::new(RecordingProcessor::default());

    let event: WebhookEvent = serde_json::from_value(json!({
        "id": "WH-82L817751G970921V",
        "event_type": "VAULT.PAYMENT-TOKEN.CREATED",
        "create_time": "2024-03-01T12:00:00Z",
        "resource": {
            "id": "8kk8451t",
            "customer_id": "ppcp-512"
        }
    }))
    .unwrap();

    let ack = dispatcher(Arc::clone(&processor)).dispatch(&event).await;

    assert!(ack.success);
    assert_eq!(*processor.captured.lock().unwrap(), vec![512]);
}

#[tokio::test]
async fn unrelated_event_types_are_acknowledged_without_side_effects() {
    let processor = Arc::new(RecordingProcessor::default());

    let event: WebhookEvent = serde_json::from_value(json!({
        "event_type": "PAYMENT.CAPTURE.COMPLETED",
        "resource": {"id": "3C679366HH908993F"}
    }))
    .unwrap();

    let ack = dispatcher(Arc::clone(&processor)).dispatch(&event).await;

    // Still a success ack so PayPal does not redeliver.
    assert!(ack.success);
    assert!(processor.captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_vault_delivery_is_reported_but_still_ackable() {
    let processor = Arc::new(RecordingProcessor::default());

    let event: WebhookEvent = serde_json::from_value(json!({
        "event_type": "VAULT.PAYMENT-TOKEN.CREATED",
        "resource": {"id": "8kk8451t"}
    }))
    .unwrap();

    let ack = dispatcher(Arc::clone(&processor)).dispatch(&event).await;

    assert!(!ack.success);
    assert!(ack.message.unwrap().contains("customer_id"));
    assert!(processor.captured.lock().unwrap().is_empty());
}
