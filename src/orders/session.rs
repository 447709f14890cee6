//! Session-scoped order cache.

use std::sync::{Mutex, PoisonError};

use crate::entities::Order;

/// Holds the most recently fetched or created [`Order`] for the current
/// customer session, so later checkout steps can read it without
/// refetching.
///
/// The cache is mutated only by [`OrderEndpoint`](super::OrderEndpoint) and
/// always via full replacement, never a partial merge: last known remote
/// state wins. When concurrent requests share one session (two browser
/// tabs), the value is simply last-writer-wins; the idempotent-capture
/// tolerance in the endpoint is the safety net for the resulting races.
///
/// # Example
///
/// ```rust
/// use paypal_checkout::orders::OrderSession;
///
/// let session = OrderSession::new();
/// assert!(session.current().is_none());
/// ```
#[derive(Debug, Default)]
pub struct OrderSession {
    current: Mutex<Option<Order>>,
}

impl OrderSession {
    /// Creates an empty session cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached order with `order`.
    pub fn replace(&self, order: Order) {
        *self.lock() = Some(order);
    }

    /// Returns a copy of the cached order, if any.
    #[must_use]
    pub fn current(&self) -> Option<Order> {
        self.lock().clone()
    }

    /// Removes and returns the cached order.
    pub fn take(&self) -> Option<Order> {
        self.lock().take()
    }

    /// Clears the cache (e.g. when the cart is emptied after payment).
    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Order>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// Verify OrderSession is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrderSession>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::OrderStatus;

    fn order(id: &str, status: OrderStatus) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "status": serde_json::to_value(status).unwrap(),
        }))
        .unwrap()
    }

    #[test]
    fn test_starts_empty() {
        assert!(OrderSession::new().current().is_none());
    }

    #[test]
    fn test_replace_overwrites_the_previous_order() {
        let session = OrderSession::new();
        session.replace(order("EC-1", OrderStatus::Created));
        session.replace(order("EC-2", OrderStatus::Approved));

        let current = session.current().unwrap();
        assert_eq!(current.id, "EC-2");
        assert_eq!(current.status, OrderStatus::Approved);
    }

    #[test]
    fn test_take_empties_the_cache() {
        let session = OrderSession::new();
        session.replace(order("EC-1", OrderStatus::Created));

        assert_eq!(session.take().unwrap().id, "EC-1");
        assert!(session.current().is_none());
    }

    #[test]
    fn test_clear_empties_the_cache() {
        let session = OrderSession::new();
        session.replace(order("EC-1", OrderStatus::Created));
        session.clear();
        assert!(session.current().is_none());
    }
}
