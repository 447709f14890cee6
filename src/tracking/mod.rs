//! Shipment tracking for captured payments.
//!
//! Wraps the `/v1/shipping/trackers` API: a batch endpoint for attaching
//! tracking information to a transaction, plus per-tracker update and
//! retrieval. Tracker ids are derived, not server-assigned, so the caller
//! never has to persist them (see [`tracker_id`]).

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::{AuthError, Bearer};
use crate::config::PayPalConfig;

/// Request timeout for calls to PayPal.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Placeholder tracking number for shipments without one.
const NO_TRACKER: &str = "NOTRACKER";

/// The shipment status reported to PayPal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingStatus {
    /// The shipment is on its way.
    Shipped,
    /// The shipment is on hold.
    OnHold,
    /// The shipment was delivered.
    Delivered,
    /// The shipment was cancelled.
    Cancelled,
}

/// Tracking information for one shipment of a captured transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingInfo {
    /// The PayPal transaction (capture) id the shipment belongs to.
    pub transaction_id: String,

    /// The shipment status.
    pub status: TrackingStatus,

    /// The carrier's tracking number, when the shipment has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// The carrier, when known (e.g. `DHL`, `FEDEX`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
}

impl TrackingInfo {
    /// The derived tracker id for this shipment.
    #[must_use]
    pub fn tracker_id(&self) -> String {
        tracker_id(&self.transaction_id, self.tracking_number.as_deref())
    }
}

/// Derives the tracker id PayPal assigns:
/// `{transaction_id}-{tracking_number}`, with the literal `NOTRACKER`
/// standing in when no tracking number exists.
///
/// # Example
///
/// ```rust
/// use paypal_checkout::tracking::tracker_id;
///
/// assert_eq!(tracker_id("8MC585209K746392H", Some("443844607820")),
///            "8MC585209K746392H-443844607820");
/// assert_eq!(tracker_id("8MC585209K746392H", None),
///            "8MC585209K746392H-NOTRACKER");
/// ```
#[must_use]
pub fn tracker_id(transaction_id: &str, tracking_number: Option<&str>) -> String {
    format!(
        "{transaction_id}-{}",
        tracking_number.unwrap_or(NO_TRACKER)
    )
}

/// Errors produced by [`TrackingEndpoint`] operations.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// Network or connection failure reaching PayPal, including timeouts.
    #[error("transport error while contacting PayPal")]
    Transport(#[from] reqwest::Error),

    /// Obtaining a bearer token failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// PayPal answered with an unaccepted status.
    #[error("tracking request rejected (HTTP {status})")]
    UnexpectedStatus {
        /// Raw response status.
        status: u16,
        /// Raw response body for diagnostics.
        body: serde_json::Value,
    },

    /// A success status code arrived with a body missing required fields.
    #[error("PayPal returned a response missing required tracking fields")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Client for the `/v1/shipping/trackers` resource.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use paypal_checkout::auth::StaticBearer;
/// use paypal_checkout::tracking::{TrackingEndpoint, TrackingInfo, TrackingStatus};
/// use paypal_checkout::PayPalConfig;
///
/// # async fn ship() -> Result<(), paypal_checkout::tracking::TrackingError> {
/// let endpoint = TrackingEndpoint::new(
///     &PayPalConfig::default(),
///     Arc::new(StaticBearer::new("token")),
/// );
///
/// endpoint
///     .add_tracking(&TrackingInfo {
///         transaction_id: "8MC585209K746392H".to_string(),
///         status: TrackingStatus::Shipped,
///         tracking_number: Some("443844607820".to_string()),
///         carrier: Some("FEDEX".to_string()),
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TrackingEndpoint {
    client: reqwest::Client,
    host: String,
    bearer: Arc<dyn Bearer>,
}

impl std::fmt::Debug for TrackingEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingEndpoint")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

// Verify TrackingEndpoint is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TrackingEndpoint>();
};

impl TrackingEndpoint {
    /// Creates an endpoint for the configured host.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &PayPalConfig, bearer: Arc<dyn Bearer>) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            host: config.api_host().to_string(),
            bearer,
        }
    }

    /// The API host requests are issued against.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Attaches tracking information to a transaction.
    ///
    /// Uses the batch endpoint with a single tracker, expecting HTTP 200.
    ///
    /// # Errors
    ///
    /// [`TrackingError::UnexpectedStatus`] for any non-200 response.
    pub async fn add_tracking(&self, info: &TrackingInfo) -> Result<(), TrackingError> {
        let token = self.bearer.bearer().await?;
        let response = self
            .client
            .post(format!("{}/v1/shipping/trackers-batch", self.host))
            .header("Authorization", format!("Bearer {}", token.as_ref()))
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "trackers": [info] }))
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(TrackingError::UnexpectedStatus {
                status,
                body: read_body(response).await,
            });
        }

        tracing::debug!(tracker_id = %info.tracker_id(), "added tracking information");
        Ok(())
    }

    /// Replaces the tracking information of an existing tracker.
    ///
    /// Expects HTTP 204; PayPal returns no body on success.
    ///
    /// # Errors
    ///
    /// [`TrackingError::UnexpectedStatus`] for any non-204 response.
    pub async fn update_tracking(&self, info: &TrackingInfo) -> Result<(), TrackingError> {
        let token = self.bearer.bearer().await?;
        let tracker_id = info.tracker_id();
        let response = self
            .client
            .put(format!("{}/v1/shipping/trackers/{tracker_id}", self.host))
            .header("Authorization", format!("Bearer {}", token.as_ref()))
            .header("Content-Type", "application/json")
            .json(info)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 204 {
            return Err(TrackingError::UnexpectedStatus {
                status,
                body: read_body(response).await,
            });
        }

        tracing::debug!(%tracker_id, "updated tracking information");
        Ok(())
    }

    /// Retrieves the current tracking information of a tracker.
    ///
    /// # Errors
    ///
    /// [`TrackingError::UnexpectedStatus`] for any non-200 response,
    /// [`TrackingError::MalformedResponse`] when the body cannot be parsed.
    pub async fn tracking_info(
        &self,
        transaction_id: &str,
        tracking_number: Option<&str>,
    ) -> Result<TrackingInfo, TrackingError> {
        let token = self.bearer.bearer().await?;
        let tracker_id = tracker_id(transaction_id, tracking_number);
        let response = self
            .client
            .get(format!("{}/v1/shipping/trackers/{tracker_id}", self.host))
            .header("Authorization", format!("Bearer {}", token.as_ref()))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = read_body(response).await;
        if status != 200 {
            return Err(TrackingError::UnexpectedStatus { status, body });
        }

        serde_json::from_value(body).map_err(TrackingError::MalformedResponse)
    }
}

async fn read_body(response: reqwest::Response) -> serde_json::Value {
    let text = response.text().await.unwrap_or_default();
    if text.is_empty() {
        serde_json::json!({})
    } else {
        serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
    }
}
