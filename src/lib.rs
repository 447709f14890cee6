//! # PayPal Checkout Rust SDK
//!
//! A Rust SDK for the PayPal Orders v2 API, providing type-safe
//! configuration, an order lifecycle client (create, capture, fetch,
//! patch), and webhook event routing for checkout integrations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PayPalConfig`] and [`PayPalConfigBuilder`]
//! - Validated newtypes for the API host and merchant prefix
//! - An order entity model with exact decimal money via [`entities`]
//! - Purchase unit sanitation that reconciles item totals before submission
//! - The order lifecycle client via [`orders::OrderEndpoint`]
//! - A session-scoped order cache via [`orders::OrderSession`]
//! - JSON-Patch reconciliation of order snapshots via [`patches`]
//! - Shipment tracking via [`tracking::TrackingEndpoint`]
//! - Webhook event routing via [`webhooks::WebhookDispatcher`]
//!
//! Token acquisition is deliberately out of scope: endpoints depend on the
//! [`auth::Bearer`] trait and the embedding application supplies an
//! implementation (or [`auth::StaticBearer`] when tokens are managed
//! elsewhere).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use paypal_checkout::auth::StaticBearer;
//! use paypal_checkout::entities::{Amount, Item, Money, PurchaseUnit};
//! use paypal_checkout::orders::{OrderEndpoint, OrderSession};
//! use paypal_checkout::{Environment, PayPalConfig};
//!
//! # async fn checkout() -> Result<(), paypal_checkout::orders::OrderError> {
//! let config = PayPalConfig::builder()
//!     .environment(Environment::Sandbox)
//!     .build();
//!
//! let session = Arc::new(OrderSession::new());
//! let endpoint = OrderEndpoint::new(
//!     &config,
//!     Arc::new(StaticBearer::new("access-token")),
//!     Arc::clone(&session),
//! );
//!
//! let unit = PurchaseUnit::new(Amount::new("USD", "10.00".parse().unwrap()))
//!     .with_items(vec![Item::new(
//!         "Widget",
//!         Money::new("USD", "10.00".parse().unwrap()),
//!         1,
//!     )]);
//!
//! // Create the order, send the buyer to PayPal for approval, then capture.
//! let order = endpoint.create_for_purchase_units(&[unit]).await?;
//! let approved = endpoint.fetch(&order.id).await?;
//! let captured = endpoint.capture(&approved).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Webhooks
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use paypal_checkout::webhooks::{
//!     AuthorizedPayments, VaultPaymentTokenCreated, WebhookDispatcher, WebhookEvent,
//! };
//! use paypal_checkout::MerchantPrefix;
//!
//! # async fn route(processor: Arc<dyn AuthorizedPayments>, event: WebhookEvent) {
//! let dispatcher = WebhookDispatcher::new().register(Box::new(
//!     VaultPaymentTokenCreated::new(MerchantPrefix::default(), processor),
//! ));
//!
//! // Always answer PayPal with a 2xx, whatever the ack says.
//! let ack = dispatcher.dispatch(&event).await;
//! # let _ = ack;
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Remote state wins**: Caches hold full server representations, never merges

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod orders;
pub mod patches;
pub mod tracking;
pub mod webhooks;

/// Boxed future type used by the object-safe async traits in this crate.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

// Re-export public types at crate root for convenience
pub use config::{ApiHost, Environment, MerchantPrefix, PayPalConfig, PayPalConfigBuilder};
pub use error::ConfigError;
