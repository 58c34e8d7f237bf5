//! Stripe API resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ChargeId, CustomerId};

/// Stripe customer object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Stripe customer ID.
    pub id: CustomerId,
    /// Object type, always `"customer"`.
    #[serde(default)]
    pub object: String,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// ID of the payment source attached when the customer was created.
    #[serde(default)]
    pub default_source: Option<String>,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// Metadata attached to the customer.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Customer {
    /// Creation time, if the timestamp is in range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }
}

/// Stripe charge object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Stripe charge ID.
    pub id: ChargeId,
    /// Object type, always `"charge"`.
    #[serde(default)]
    pub object: String,
    /// Amount in the currency's minor unit (cents for USD).
    pub amount: u64,
    /// Three-letter ISO currency code, lowercase.
    #[serde(default)]
    pub currency: String,
    /// Customer the charge was made against.
    #[serde(default)]
    pub customer: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the charge succeeded or was authorized.
    #[serde(default)]
    pub paid: bool,
    /// `succeeded`, `pending`, or `failed`.
    #[serde(default)]
    pub status: String,
    /// Error code explaining a failure, if any.
    #[serde(default)]
    pub failure_code: Option<String>,
    /// Human-readable failure reason, if any.
    #[serde(default)]
    pub failure_message: Option<String>,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// Metadata attached to the charge.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Charge {
    /// Creation time, if the timestamp is in range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }

    /// Whether the charge reached the `succeeded` status.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status == "succeeded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn customer_from_api_payload() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "cus_NffrFeUfNV2Hib",
            "object": "customer",
            "address": null,
            "balance": 0,
            "created": 1_680_893_993,
            "default_source": "card_1MuN0s2eZvKYlo2C",
            "email": "jennyrosen@example.com",
            "livemode": false,
            "metadata": {}
        }))
        .unwrap();

        assert_eq!(customer.id.as_str(), "cus_NffrFeUfNV2Hib");
        assert_eq!(customer.email.as_deref(), Some("jennyrosen@example.com"));
        assert_eq!(
            customer.default_source.as_deref(),
            Some("card_1MuN0s2eZvKYlo2C")
        );
        assert!(!customer.livemode);
        assert_eq!(
            customer.created_at().unwrap().to_rfc3339(),
            "2023-04-07T18:59:53+00:00"
        );
    }

    #[test]
    fn customer_minimal_payload_uses_defaults() {
        let customer: Customer = serde_json::from_value(json!({ "id": "cus_1" })).unwrap();
        assert!(customer.email.is_none());
        assert_eq!(customer.created, 0);
        assert!(customer.metadata.is_null());
    }

    #[test]
    fn customer_rejects_foreign_id() {
        let result: Result<Customer, _> = serde_json::from_value(json!({ "id": "ch_1" }));
        assert!(result.is_err());
    }

    #[test]
    fn charge_from_api_payload() {
        let charge: Charge = serde_json::from_value(json!({
            "id": "ch_3MmlLrLkdIwHu7ix0snN0B15",
            "object": "charge",
            "amount": 1099,
            "currency": "usd",
            "customer": "cus_NffrFeUfNV2Hib",
            "paid": true,
            "status": "succeeded",
            "failure_code": null,
            "created": 1_679_090_539,
            "livemode": false,
            "metadata": {}
        }))
        .unwrap();

        assert_eq!(charge.amount, 1099);
        assert_eq!(charge.customer.as_deref(), Some("cus_NffrFeUfNV2Hib"));
        assert!(charge.paid);
        assert!(charge.succeeded());
        assert!(charge.failure_code.is_none());
    }

    #[test]
    fn failed_charge_is_not_succeeded() {
        let charge: Charge = serde_json::from_value(json!({
            "id": "ch_1",
            "amount": 500,
            "status": "failed",
            "failure_code": "card_declined",
            "failure_message": "Your card was declined."
        }))
        .unwrap();

        assert!(!charge.succeeded());
        assert_eq!(charge.failure_code.as_deref(), Some("card_declined"));
    }
}
