//! Routing of incoming webhook events to handlers.

use crate::BoxFuture;

use super::event::{WebhookAck, WebhookEvent};

/// A handler for one or more webhook event types.
///
/// Object safe so the dispatcher can own a heterogeneous handler list.
pub trait WebhookEventHandler: Send + Sync {
    /// The event types this handler accepts, exactly as PayPal names them.
    fn event_types(&self) -> &[&str];

    /// Handles an event previously matched by [`event_types`](Self::event_types).
    fn handle(&self, event: &WebhookEvent) -> BoxFuture<'_, WebhookAck>;
}

/// Routes webhook events to the first registered handler that claims the
/// event type.
///
/// Matching is a linear scan in registration order, so registration order
/// is the tie-break when two handlers claim the same type. Events no
/// handler claims are acknowledged as successful and logged; anything else
/// would make PayPal redeliver events the integration has no use for.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use paypal_checkout::webhooks::{VaultPaymentTokenCreated, WebhookDispatcher};
/// # use paypal_checkout::webhooks::AuthorizedPayments;
/// # use paypal_checkout::MerchantPrefix;
///
/// # fn build(processor: Arc<dyn AuthorizedPayments>) -> WebhookDispatcher {
/// WebhookDispatcher::new()
///     .register(Box::new(VaultPaymentTokenCreated::new(
///         MerchantPrefix::default(),
///         processor,
///     )))
/// # }
/// ```
#[derive(Default)]
pub struct WebhookDispatcher {
    handlers: Vec<Box<dyn WebhookEventHandler>>,
}

impl std::fmt::Debug for WebhookDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl WebhookDispatcher {
    /// Creates a dispatcher with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler. Earlier registrations win ties.
    #[must_use]
    pub fn register(mut self, handler: Box<dyn WebhookEventHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// The number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true when no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatches `event` to the first handler claiming its type.
    ///
    /// Unmatched events are acknowledged as successful so PayPal stops
    /// redelivering them.
    pub async fn dispatch(&self, event: &WebhookEvent) -> WebhookAck {
        for handler in &self.handlers {
            if handler
                .event_types()
                .iter()
                .any(|accepted| *accepted == event.event_type)
            {
                return handler.handle(event).await;
            }
        }

        tracing::debug!(
            event_type = %event.event_type,
            event_id = event.id.as_deref().unwrap_or("<none>"),
            "no handler registered for webhook event, acknowledging"
        );
        WebhookAck::ok()
    }
}

// Verify WebhookDispatcher is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebhookDispatcher>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct TagHandler {
        types: Vec<&'static str>,
        tag: &'static str,
    }

    impl WebhookEventHandler for TagHandler {
        fn event_types(&self) -> &[&str] {
            &self.types
        }

        fn handle(&self, _event: &WebhookEvent) -> BoxFuture<'_, WebhookAck> {
            let tag = self.tag;
            Box::pin(async move { WebhookAck::failed(tag) })
        }
    }

    fn event(event_type: &str) -> WebhookEvent {
        serde_json::from_value(json!({"event_type": event_type})).unwrap()
    }

    #[tokio::test]
    async fn test_routes_to_the_matching_handler() {
        let dispatcher = WebhookDispatcher::new()
            .register(Box::new(TagHandler {
                types: vec!["CHECKOUT.ORDER.APPROVED"],
                tag: "approved",
            }))
            .register(Box::new(TagHandler {
                types: vec!["PAYMENT.CAPTURE.COMPLETED"],
                tag: "completed",
            }));

        let ack = dispatcher.dispatch(&event("PAYMENT.CAPTURE.COMPLETED")).await;
        assert_eq!(ack.message.as_deref(), Some("completed"));
    }

    #[tokio::test]
    async fn test_first_registered_handler_wins_ties() {
        let dispatcher = WebhookDispatcher::new()
            .register(Box::new(TagHandler {
                types: vec!["CHECKOUT.ORDER.APPROVED"],
                tag: "first",
            }))
            .register(Box::new(TagHandler {
                types: vec!["CHECKOUT.ORDER.APPROVED"],
                tag: "second",
            }));

        let ack = dispatcher.dispatch(&event("CHECKOUT.ORDER.APPROVED")).await;
        assert_eq!(ack.message.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_unmatched_events_are_acknowledged_as_success() {
        let dispatcher = WebhookDispatcher::new().register(Box::new(TagHandler {
            types: vec!["CHECKOUT.ORDER.APPROVED"],
            tag: "approved",
        }));

        let ack = dispatcher.dispatch(&event("BILLING.PLAN.CREATED")).await;
        assert_eq!(ack, WebhookAck::ok());
    }

    #[tokio::test]
    async fn test_empty_dispatcher_acknowledges_everything() {
        let dispatcher = WebhookDispatcher::new();
        assert!(dispatcher.is_empty());

        let ack = dispatcher.dispatch(&event("ANY.EVENT")).await;
        assert!(ack.success);
    }
}
