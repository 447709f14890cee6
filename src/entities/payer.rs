//! Payer types.

use serde::{Deserialize, Serialize};

use super::Address;

/// The name of the paying customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PayerName {
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Surname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
}

/// The customer paying for an order.
///
/// All fields are optional; PayPal only populates what the buyer has
/// shared with the merchant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Payer {
    /// PayPal-assigned account id of the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,

    /// Email address of the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Name of the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PayerName>,

    /// Billing address of the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payer_round_trips() {
        let payer = Payer {
            payer_id: Some("PAYER123".to_string()),
            email_address: Some("buyer@example.com".to_string()),
            name: Some(PayerName {
                given_name: Some("Ada".to_string()),
                surname: Some("Lovelace".to_string()),
            }),
            address: None,
        };

        let json = serde_json::to_value(&payer).unwrap();
        let back: Payer = serde_json::from_value(json).unwrap();
        assert_eq!(back, payer);
    }

    #[test]
    fn test_empty_payer_serializes_to_empty_object() {
        let json = serde_json::to_value(Payer::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
