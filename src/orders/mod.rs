//! The order lifecycle: create, capture, fetch, patch, and the per-session
//! order cache.
//!
//! [`OrderEndpoint`] is the single owner of remote order operations and of
//! the write path into [`OrderSession`]. Errors are typed per operation in
//! [`OrderError`], with the structured PayPal error body available through
//! [`OrderError::api_error`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use paypal_checkout::auth::StaticBearer;
//! use paypal_checkout::orders::{OrderEndpoint, OrderSession};
//! use paypal_checkout::PayPalConfig;
//!
//! let config = PayPalConfig::default();
//! let session = Arc::new(OrderSession::new());
//! let endpoint = OrderEndpoint::new(
//!     &config,
//!     Arc::new(StaticBearer::new("token")),
//!     Arc::clone(&session),
//! );
//! ```

mod endpoint;
mod errors;
mod session;

pub use endpoint::OrderEndpoint;
pub use errors::{ErrorDetail, OrderError, PayPalApiError};
pub use session::OrderSession;
