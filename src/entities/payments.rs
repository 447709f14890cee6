//! Payment sub-resources attached to a purchase unit after capture or
//! authorization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Money;

/// An authorization held against an approved order (`AUTHORIZE` intent).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Authorization {
    /// PayPal authorization id.
    pub id: String,

    /// Authorization status (e.g. `CREATED`, `CAPTURED`, `VOIDED`).
    pub status: String,

    /// Authorized amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// When the authorization expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime<Utc>>,
}

/// A completed (or pending) capture of funds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capture {
    /// PayPal capture id; doubles as the transaction id for tracking.
    pub id: String,

    /// Capture status (e.g. `COMPLETED`, `PENDING`, `REFUNDED`).
    pub status: String,

    /// Captured amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// Whether this capture settles the full order amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_capture: Option<bool>,
}

/// A refund issued against a capture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Refund {
    /// PayPal refund id.
    pub id: String,

    /// Refund status (e.g. `COMPLETED`, `PENDING`).
    pub status: String,

    /// Refunded amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

/// Container for the payment records of a purchase unit.
///
/// Empty sequences are omitted from the wire representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Payments {
    /// Authorizations held against the order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorizations: Vec<Authorization>,

    /// Captures of funds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub captures: Vec<Capture>,

    /// Refunds issued.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refunds: Vec<Refund>,
}
