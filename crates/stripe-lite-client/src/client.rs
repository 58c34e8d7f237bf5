//! Stripe API client implementation.

use std::fmt;
use std::sync::Arc;

use stripe_lite_core::{Charge, ChargeId, Customer, CustomerId};

use crate::config::ClientConfig;
use crate::decode::decode;
use crate::error::ClientError;
use crate::request::{Method, RequestBuilder};
use crate::transport::{HttpTransport, Transport};
use crate::types::{ChargeParams, CustomerParams};

/// Stripe API client.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct StripeClient {
    transport: Arc<dyn Transport>,
    api_key: String,
}

impl fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeClient")
            .field("transport", &self.transport)
            .field("api_key", &"[redacted]")
            .finish()
    }
}

impl StripeClient {
    /// Create a client for the live Stripe API.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::new(api_key))
    }

    /// Create a live client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::with_base_url(&config.base_url, config.timeout_seconds)?;
        Self::with_transport(config.api_key.clone(), Arc::new(transport))
    }

    /// Create a client that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn with_transport(
        api_key: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ClientError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ClientError::Configuration("API key is empty".into()));
        }

        Ok(Self { transport, api_key })
    }

    /// Create a customer from a payment token and email.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, the request fails, or Stripe
    /// rejects it.
    pub async fn customer(&self, token: &str, email: &str) -> Result<Customer, ClientError> {
        self.create_customer(&CustomerParams::new(token).with_email(email))
            .await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, the request fails, or Stripe
    /// rejects it.
    pub async fn create_customer(&self, params: &CustomerParams) -> Result<Customer, ClientError> {
        if params.source.trim().is_empty() {
            return Err(ClientError::InvalidParams("payment token is empty".into()));
        }

        let request = RequestBuilder::new(Method::Post, "customers")
            .api_key(&self.api_key)
            .param("source", &params.source)
            .param_opt("email", params.email.as_deref())
            .param_opt("description", params.description.as_deref())
            .metadata(&params.metadata)
            .build();

        tracing::debug!(email = ?params.email, "Creating Stripe customer");

        let response = self.transport.send(&request).await?;
        decode(&response)
    }

    /// Charge `amount` cents (USD) to a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, the request fails, or Stripe
    /// rejects it.
    pub async fn charge(&self, customer: &CustomerId, amount: u64) -> Result<Charge, ClientError> {
        self.create_charge(&ChargeParams::new(customer.clone(), amount))
            .await
    }

    /// Create a charge.
    ///
    /// A random idempotency key is sent unless the parameters carry one.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, the currency is empty, the
    /// request fails, or Stripe rejects it.
    pub async fn create_charge(&self, params: &ChargeParams) -> Result<Charge, ClientError> {
        if params.amount == 0 {
            return Err(ClientError::InvalidParams("amount must be positive".into()));
        }
        if params.currency.trim().is_empty() {
            return Err(ClientError::InvalidParams("currency is empty".into()));
        }

        let idempotency_key = params
            .idempotency_key
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let request = RequestBuilder::new(Method::Post, "charges")
            .api_key(&self.api_key)
            .idempotency_key(idempotency_key)
            .param("customer", &params.customer)
            .param("amount", params.amount)
            .param("currency", &params.currency)
            .param_opt("description", params.description.as_deref())
            .metadata(&params.metadata)
            .build();

        tracing::debug!(
            customer = %params.customer,
            amount = params.amount,
            currency = %params.currency,
            "Creating Stripe charge"
        );

        let response = self.transport.send(&request).await?;
        decode(&response)
    }

    /// Retrieve a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it
    /// (`resource_missing` for unknown IDs).
    pub async fn retrieve_customer(&self, id: &CustomerId) -> Result<Customer, ClientError> {
        let request = RequestBuilder::new(Method::Get, &format!("customers/{id}"))
            .api_key(&self.api_key)
            .build();

        let response = self.transport.send(&request).await?;
        decode(&response)
    }

    /// Retrieve a charge by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it
    /// (`resource_missing` for unknown IDs).
    pub async fn retrieve_charge(&self, id: &ChargeId) -> Result<Charge, ClientError> {
        let request = RequestBuilder::new(Method::Get, &format!("charges/{id}"))
            .api_key(&self.api_key)
            .build();

        let response = self.transport.send(&request).await?;
        decode(&response)
    }
}
