//! Webhook event routing.
//!
//! PayPal pushes asynchronous notifications (vaulted payment tokens,
//! capture outcomes) as webhook events. [`WebhookDispatcher`] routes each
//! incoming [`WebhookEvent`] to the first registered
//! [`WebhookEventHandler`] that claims its type and always produces a
//! [`WebhookAck`] for the HTTP layer to return with a 2xx status.
//!
//! Signature verification of incoming deliveries is the embedding
//! application's concern; this module assumes events were already
//! authenticated.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use paypal_checkout::webhooks::{
//!     AuthorizedPayments, VaultPaymentTokenCreated, WebhookDispatcher,
//! };
//! use paypal_checkout::MerchantPrefix;
//!
//! # fn build(processor: Arc<dyn AuthorizedPayments>) -> WebhookDispatcher {
//! WebhookDispatcher::new().register(Box::new(VaultPaymentTokenCreated::new(
//!     MerchantPrefix::default(),
//!     processor,
//! )))
//! # }
//! ```

mod dispatcher;
mod event;
mod handlers;

pub use dispatcher::{WebhookDispatcher, WebhookEventHandler};
pub use event::{WebhookAck, WebhookEvent};
pub use handlers::{AuthorizedPayments, HandlerError, VaultPaymentTokenCreated};
