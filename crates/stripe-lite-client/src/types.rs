//! Request parameter types.

use std::collections::BTreeMap;
use stripe_lite_core::CustomerId;

/// Parameters for creating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerParams {
    /// Payment source token, e.g. `tok_amex`.
    pub source: String,
    /// Customer email.
    pub email: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Metadata sent as `metadata[key]`.
    pub metadata: BTreeMap<String, String>,
}

impl CustomerParams {
    /// Create parameters for a payment token.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Set the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Parameters for creating a charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeParams {
    /// Customer to charge.
    pub customer: CustomerId,
    /// Amount in the currency's minor unit.
    pub amount: u64,
    /// Three-letter ISO currency code.
    pub currency: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Idempotency key; generated when absent.
    pub idempotency_key: Option<String>,
    /// Metadata sent as `metadata[key]`.
    pub metadata: BTreeMap<String, String>,
}

impl ChargeParams {
    /// Default charge currency.
    pub const DEFAULT_CURRENCY: &'static str = "usd";

    /// Charge `amount` minor units of USD to `customer`.
    #[must_use]
    pub fn new(customer: CustomerId, amount: u64) -> Self {
        Self {
            customer,
            amount,
            currency: Self::DEFAULT_CURRENCY.to_string(),
            description: None,
            idempotency_key: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Set the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Use a caller-chosen idempotency key.
    #[must_use]
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
