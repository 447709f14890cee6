//! Built-in webhook event handlers.

use std::sync::Arc;

use crate::config::MerchantPrefix;
use crate::BoxFuture;

use super::dispatcher::WebhookEventHandler;
use super::event::{WebhookAck, WebhookEvent};

/// Boxed error type handler collaborators report failures with.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Captures payments previously authorized for a vaulted customer.
///
/// Implemented by the payment-processing side of the integration; the
/// webhook layer only identifies which customer's authorizations became
/// capturable.
pub trait AuthorizedPayments: Send + Sync {
    /// Captures all pending authorized payments for `customer_id`.
    fn capture_authorized_payments_for_customer(
        &self,
        customer_id: u64,
    ) -> BoxFuture<'_, Result<(), HandlerError>>;
}

/// Handles `VAULT.PAYMENT-TOKEN.CREATED`: once a customer's payment token
/// is vaulted, their previously authorized payments can be captured.
///
/// The event's `resource.customer_id` arrives in the composite form
/// `<prefix>-<numericId>`; the numeric id is whatever follows the last
/// `-`, which tolerates prefixes that themselves contain dashes.
pub struct VaultPaymentTokenCreated {
    prefix: MerchantPrefix,
    processor: Arc<dyn AuthorizedPayments>,
}

impl std::fmt::Debug for VaultPaymentTokenCreated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultPaymentTokenCreated")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl VaultPaymentTokenCreated {
    /// Creates the handler for the given merchant prefix.
    #[must_use]
    pub fn new(prefix: MerchantPrefix, processor: Arc<dyn AuthorizedPayments>) -> Self {
        Self { prefix, processor }
    }

    fn customer_id(&self, event: &WebhookEvent) -> Result<u64, String> {
        let composite = event
            .resource
            .get("customer_id")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| "event resource carries no customer_id".to_string())?;

        let raw_id = composite.rsplit_once('-').map_or(composite, |(_, id)| id);
        raw_id.parse().map_err(|_| {
            format!(
                "could not extract a numeric customer id from '{composite}' (expected '{}-<id>')",
                self.prefix.as_ref()
            )
        })
    }
}

impl WebhookEventHandler for VaultPaymentTokenCreated {
    fn event_types(&self) -> &[&str] {
        &["VAULT.PAYMENT-TOKEN.CREATED"]
    }

    fn handle(&self, event: &WebhookEvent) -> BoxFuture<'_, WebhookAck> {
        let customer_id = self.customer_id(event);
        Box::pin(async move {
            let customer_id = match customer_id {
                Ok(id) => id,
                Err(message) => {
                    tracing::warn!(%message, "ignoring malformed vault webhook");
                    return WebhookAck::failed(message);
                }
            };

            match self
                .processor
                .capture_authorized_payments_for_customer(customer_id)
                .await
            {
                Ok(()) => WebhookAck::ok(),
                Err(error) => {
                    tracing::warn!(customer_id, %error, "capturing authorized payments failed");
                    WebhookAck::failed(format!(
                        "could not capture authorized payments for customer {customer_id}: {error}"
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProcessor {
        captured: Mutex<Vec<u64>>,
        fail: bool,
    }

    impl AuthorizedPayments for RecordingProcessor {
        fn capture_authorized_payments_for_customer(
            &self,
            customer_id: u64,
        ) -> BoxFuture<'_, Result<(), HandlerError>> {
            self.captured
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(customer_id);
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err("gateway unavailable".into())
                } else {
                    Ok(())
                }
            })
        }
    }

    fn handler(processor: Arc<RecordingProcessor>) -> VaultPaymentTokenCreated {
        VaultPaymentTokenCreated::new(MerchantPrefix::default(), processor)
    }

    fn vault_event(resource: serde_json::Value) -> WebhookEvent {
        serde_json::from_value(json!({
            "event_type": "VAULT.PAYMENT-TOKEN.CREATED",
            "resource": resource,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_the_numeric_customer_id() {
        let processor = Arc::new(RecordingProcessor::default());
        let ack = handler(Arc::clone(&processor))
            .handle(&vault_event(json!({"customer_id": "ppcp-42"})))
            .await;

        assert!(ack.success);
        assert_eq!(*processor.captured.lock().unwrap(), vec![42]);
    }

    #[tokio::test]
    async fn test_uses_the_segment_after_the_last_dash() {
        let processor = Arc::new(RecordingProcessor::default());
        let ack = handler(Arc::clone(&processor))
            .handle(&vault_event(json!({"customer_id": "acme-eu-7"})))
            .await;

        assert!(ack.success);
        assert_eq!(*processor.captured.lock().unwrap(), vec![7]);
    }

    #[tokio::test]
    async fn test_missing_customer_id_fails_without_calling_the_processor() {
        let processor = Arc::new(RecordingProcessor::default());
        let ack = handler(Arc::clone(&processor))
            .handle(&vault_event(json!({})))
            .await;

        assert!(!ack.success);
        assert!(ack.message.unwrap().contains("customer_id"));
        assert!(processor.captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_id_fails_without_calling_the_processor() {
        let processor = Arc::new(RecordingProcessor::default());
        let ack = handler(Arc::clone(&processor))
            .handle(&vault_event(json!({"customer_id": "ppcp-abc"})))
            .await;

        assert!(!ack.success);
        assert!(processor.captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_processor_failure_is_reported_in_the_ack() {
        let processor = Arc::new(RecordingProcessor {
            fail: true,
            ..RecordingProcessor::default()
        });
        let ack = handler(Arc::clone(&processor))
            .handle(&vault_event(json!({"customer_id": "ppcp-42"})))
            .await;

        assert!(!ack.success);
        assert!(ack.message.unwrap().contains("gateway unavailable"));
    }
}
