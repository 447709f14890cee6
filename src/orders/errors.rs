//! Error taxonomy for order operations.
//!
//! Every operation surfaces failures as a typed error, never a silent
//! `None`; the single defined tolerance is the 422 `ORDER_ALREADY_CAPTURED`
//! special case handled inside [`OrderEndpoint::capture`](super::OrderEndpoint::capture).
//! Raw status codes and bodies are carried for operator diagnostics; they
//! are meant for logs, not for end customers.

use serde::Deserialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::entities::OrderStatus;

/// One entry of a structured PayPal error body's `details` array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorDetail {
    /// Machine-readable issue code (e.g. `ORDER_ALREADY_CAPTURED`).
    #[serde(default)]
    pub issue: Option<String>,

    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,

    /// The request field the issue refers to, when applicable.
    #[serde(default)]
    pub field: Option<String>,
}

/// A structured error body returned by the PayPal API.
///
/// Parsed best-effort: any field may be absent, and a non-JSON body parses
/// to an empty error.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct PayPalApiError {
    /// Error name (e.g. `UNPROCESSABLE_ENTITY`).
    #[serde(default)]
    pub name: Option<String>,

    /// Top-level message.
    #[serde(default)]
    pub message: Option<String>,

    /// Issue details.
    #[serde(default)]
    pub details: Vec<ErrorDetail>,

    /// PayPal debug id for support tickets.
    #[serde(default)]
    pub debug_id: Option<String>,
}

impl PayPalApiError {
    /// Parses an error body, tolerating any shape.
    #[must_use]
    pub fn from_body(body: &serde_json::Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }

    /// Returns true when any detail entry carries the given issue code.
    #[must_use]
    pub fn has_issue(&self, issue: &str) -> bool {
        self.details
            .iter()
            .any(|detail| detail.issue.as_deref() == Some(issue))
    }
}

/// Errors produced by [`OrderEndpoint`](super::OrderEndpoint) operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Network or connection failure reaching PayPal, including timeouts.
    /// Not retried by this crate.
    #[error("transport error while contacting PayPal")]
    Transport(#[from] reqwest::Error),

    /// Obtaining a bearer token failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Order creation returned something other than HTTP 201.
    #[error("could not create order (HTTP {status})")]
    Creation {
        /// Raw response status.
        status: u16,
        /// Raw response body for diagnostics.
        body: serde_json::Value,
    },

    /// Order capture returned an unaccepted status.
    #[error("could not capture order (HTTP {status})")]
    Capture {
        /// Raw response status.
        status: u16,
        /// Raw response body for diagnostics.
        body: serde_json::Value,
    },

    /// The order does not exist remotely (HTTP 404).
    #[error("order {id} not found")]
    NotFound {
        /// The order id that was requested.
        id: String,
    },

    /// Order retrieval returned something other than HTTP 200.
    #[error("could not retrieve order (HTTP {status})")]
    Fetch {
        /// Raw response status.
        status: u16,
        /// Raw response body for diagnostics.
        body: serde_json::Value,
    },

    /// Order patching returned something other than HTTP 204.
    #[error("could not patch order (HTTP {status})")]
    Patch {
        /// Raw response status.
        status: u16,
        /// Raw response body for diagnostics.
        body: serde_json::Value,
    },

    /// Capture was requested for an order the session does not report as
    /// approved. This is a caller contract violation detected before any
    /// network call.
    #[error("order is not approved for capture (status {status:?})")]
    NotApproved {
        /// The status the cached order reported.
        status: OrderStatus,
    },

    /// A success status code arrived with a body missing required order
    /// fields.
    #[error("PayPal returned a response missing required order fields")]
    MalformedResponse(#[source] serde_json::Error),
}

impl OrderError {
    /// The structured PayPal error body, when this error carries one.
    #[must_use]
    pub fn api_error(&self) -> Option<PayPalApiError> {
        match self {
            Self::Creation { body, .. }
            | Self::Capture { body, .. }
            | Self::Fetch { body, .. }
            | Self::Patch { body, .. } => Some(PayPalApiError::from_body(body)),
            _ => None,
        }
    }
}

// Verify OrderError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrderError>();
};
