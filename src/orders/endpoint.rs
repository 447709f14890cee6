//! The order endpoint: all remote operations on the Order resource.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::Bearer;
use crate::config::PayPalConfig;
use crate::entities::{Intent, Order, PurchaseUnit, PurchaseUnitSanitizer};
use crate::patches::PatchCollection;

use super::errors::{OrderError, PayPalApiError};
use super::session::OrderSession;

/// Issue code PayPal returns when an order has already been captured.
const ORDER_ALREADY_CAPTURED: &str = "ORDER_ALREADY_CAPTURED";

/// Request timeout for calls to PayPal.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the `/v2/checkout/orders` resource.
///
/// Owns the create/capture/fetch/patch operations and the error-mapping
/// policy. Every successful mutating operation replaces the
/// [`OrderSession`] cache with the order PayPal returned: last known remote
/// state wins, the cached copy is never merged.
///
/// A bearer token is obtained from the [`Bearer`] collaborator at call
/// time; the endpoint never caches tokens. Each operation is a single
/// request/response cycle with a bounded timeout; transport failures are
/// not retried (the semantic 422 `ORDER_ALREADY_CAPTURED` tolerance in
/// [`capture`](Self::capture) is the only retry-like behavior).
///
/// # Thread Safety
///
/// `OrderEndpoint` is `Send + Sync`, making it safe to share across async
/// tasks.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use paypal_checkout::auth::StaticBearer;
/// use paypal_checkout::entities::{Amount, Item, Money, PurchaseUnit};
/// use paypal_checkout::orders::{OrderEndpoint, OrderSession};
/// use paypal_checkout::PayPalConfig;
///
/// # async fn checkout() -> Result<(), paypal_checkout::orders::OrderError> {
/// let config = PayPalConfig::default();
/// let session = Arc::new(OrderSession::new());
/// let endpoint = OrderEndpoint::new(&config, Arc::new(StaticBearer::new("token")), session);
///
/// let unit = PurchaseUnit::new(Amount::new("USD", "10.00".parse().unwrap()))
///     .with_items(vec![Item::new(
///         "Widget",
///         Money::new("USD", "10.00".parse().unwrap()),
///         1,
///     )]);
///
/// let order = endpoint.create_for_purchase_units(&[unit]).await?;
/// // ... buyer approves on PayPal ...
/// let order = endpoint.fetch(&order.id).await?;
/// let captured = endpoint.capture(&order).await?;
/// # Ok(())
/// # }
/// ```
pub struct OrderEndpoint {
    client: reqwest::Client,
    host: String,
    bearer: Arc<dyn Bearer>,
    session: Arc<OrderSession>,
    intent: Intent,
    sanitizer: PurchaseUnitSanitizer,
}

impl std::fmt::Debug for OrderEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderEndpoint")
            .field("host", &self.host)
            .field("intent", &self.intent)
            .finish_non_exhaustive()
    }
}

// Verify OrderEndpoint is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrderEndpoint>();
};

impl OrderEndpoint {
    /// Creates an endpoint for the configured host.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(
        config: &PayPalConfig,
        bearer: Arc<dyn Bearer>,
        session: Arc<OrderSession>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            host: config.api_host().to_string(),
            bearer,
            session,
            intent: config.intent(),
            sanitizer: config.sanitizer(),
        }
    }

    /// The API host requests are issued against.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The session cache this endpoint writes through to.
    #[must_use]
    pub fn session(&self) -> &Arc<OrderSession> {
        &self.session
    }

    /// Creates a remote order for the given purchase units.
    ///
    /// Each unit is passed through the configured sanitizer before being
    /// sent. On success (HTTP 201) the session cache is replaced with the
    /// new order.
    ///
    /// # Errors
    ///
    /// [`OrderError::Creation`] for any response other than 201,
    /// [`OrderError::Transport`] on network failure,
    /// [`OrderError::MalformedResponse`] when the 201 body lacks required
    /// fields.
    pub async fn create_for_purchase_units(
        &self,
        purchase_units: &[PurchaseUnit],
    ) -> Result<Order, OrderError> {
        let token = self.bearer.bearer().await?;
        let units: Vec<PurchaseUnit> = purchase_units
            .iter()
            .map(|unit| self.sanitizer.sanitize(unit))
            .collect();
        let data = serde_json::json!({
            "intent": self.intent,
            "purchase_units": units,
        });

        let response = self
            .client
            .post(format!("{}/v2/checkout/orders", self.host))
            .header("Authorization", format!("Bearer {}", token.as_ref()))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .json(&data)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = read_body(response).await;
        if status != 201 {
            return Err(OrderError::Creation { status, body });
        }

        let order = parse_order(body)?;
        tracing::debug!(order_id = %order.id, "created order");
        self.session.replace(order.clone());
        Ok(order)
    }

    /// Captures payment for an approved order.
    ///
    /// Refuses without a network call unless `order` reports status
    /// `APPROVED` — attempting otherwise is a caller contract violation.
    ///
    /// HTTP 422 with issue `ORDER_ALREADY_CAPTURED` is treated as an
    /// idempotent success (double-click of a pay button): the order is
    /// re-fetched and returned as if the capture had succeeded. On success
    /// the session cache is replaced.
    ///
    /// # Errors
    ///
    /// [`OrderError::NotApproved`] when the local status forbids capture,
    /// [`OrderError::Capture`] for any other unaccepted response.
    pub async fn capture(&self, order: &Order) -> Result<Order, OrderError> {
        if !order.status.is_approved() {
            return Err(OrderError::NotApproved {
                status: order.status,
            });
        }

        let token = self.bearer.bearer().await?;
        let response = self
            .client
            .post(format!(
                "{}/v2/checkout/orders/{}/capture",
                self.host, order.id
            ))
            .header("Authorization", format!("Bearer {}", token.as_ref()))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = read_body(response).await;

        if status == 422 && PayPalApiError::from_body(&body).has_issue(ORDER_ALREADY_CAPTURED) {
            // Double submission; the remote order is already final.
            tracing::debug!(order_id = %order.id, "order already captured, treating as success");
            let refreshed = self.fetch(&order.id).await?;
            self.session.replace(refreshed.clone());
            return Ok(refreshed);
        }

        if status != 201 {
            return Err(OrderError::Capture { status, body });
        }

        let captured = parse_order(body)?;
        tracing::debug!(order_id = %captured.id, status = ?captured.status, "captured order");
        self.session.replace(captured.clone());
        Ok(captured)
    }

    /// Retrieves the current remote state of an order.
    ///
    /// Read-only: the session cache is not touched, so callers can compare
    /// remote truth against the cached copy.
    ///
    /// # Errors
    ///
    /// [`OrderError::NotFound`] on 404, [`OrderError::Fetch`] for any other
    /// non-200 response.
    pub async fn fetch(&self, id: &str) -> Result<Order, OrderError> {
        let token = self.bearer.bearer().await?;
        let response = self
            .client
            .get(format!("{}/v2/checkout/orders/{id}", self.host))
            .header("Authorization", format!("Bearer {}", token.as_ref()))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = read_body(response).await;
        match status {
            200 => parse_order(body),
            404 => Err(OrderError::NotFound { id: id.to_string() }),
            _ => Err(OrderError::Fetch { status, body }),
        }
    }

    /// Reconciles the remote order with desired local state.
    ///
    /// Diffs `order_to_update` (last known remote truth) against
    /// `order_to_compare` (what local logic wants remote truth to become).
    /// An empty diff returns `order_to_update` unchanged without issuing
    /// any HTTP request. Otherwise the patch document is sent (expecting
    /// HTTP 204), the order is re-fetched to obtain the authoritative
    /// post-patch representation, and the session cache is replaced with
    /// that refetched value.
    ///
    /// # Errors
    ///
    /// [`OrderError::Patch`] for any non-204 patch response; fetch errors
    /// propagate from the follow-up retrieval.
    pub async fn patch_order_with(
        &self,
        order_to_update: &Order,
        order_to_compare: &Order,
    ) -> Result<Order, OrderError> {
        let patches = PatchCollection::from_orders(order_to_update, order_to_compare);
        if patches.is_empty() {
            tracing::debug!(order_id = %order_to_update.id, "nothing to patch, skipping request");
            return Ok(order_to_update.clone());
        }

        let token = self.bearer.bearer().await?;
        let response = self
            .client
            .patch(format!(
                "{}/v2/checkout/orders/{}",
                self.host, order_to_update.id
            ))
            .header("Authorization", format!("Bearer {}", token.as_ref()))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .json(&patches)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 204 {
            let body = read_body(response).await;
            return Err(OrderError::Patch { status, body });
        }

        let refreshed = self.fetch(&order_to_update.id).await?;
        tracing::debug!(
            order_id = %refreshed.id,
            patches = patches.len(),
            "patched order and refreshed from remote"
        );
        self.session.replace(refreshed.clone());
        Ok(refreshed)
    }
}

/// Reads a response body as JSON, mapping an empty or non-JSON body to an
/// empty object so error variants always carry something inspectable.
async fn read_body(response: reqwest::Response) -> serde_json::Value {
    let text = response.text().await.unwrap_or_default();
    if text.is_empty() {
        serde_json::json!({})
    } else {
        serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
    }
}

fn parse_order(body: serde_json::Value) -> Result<Order, OrderError> {
    serde_json::from_value(body).map_err(OrderError::MalformedResponse)
}
