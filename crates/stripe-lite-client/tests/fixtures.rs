//! Client contract tests against recorded fixtures.
//!
//! By default these replay `tests/fixtures/*.json`. To refresh the fixtures
//! against the Stripe test API:
//!
//! `STRIPE_FIXTURES=record STRIPE_API_KEY=sk_test_... cargo test --test fixtures`

mod common;

use common::FixtureClient;
use stripe_lite_client::{ClientError, ErrorKind};

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn customer_from_token() {
    let harness = FixtureClient::new("customer_create").await;

    let customer = harness
        .client
        .customer("tok_amex", "test@example.com")
        .await
        .expect("Customer() failed");

    assert!(customer.id.as_str().starts_with("cus_"));
    assert_eq!(customer.email.as_deref(), Some("test@example.com"));
    assert!(customer.default_source.is_some());

    harness.finish().await;
}

#[tokio::test]
async fn customer_with_declined_card() {
    let harness = FixtureClient::new("charge_declined").await;

    let err = harness
        .client
        .customer("tok_chargeDeclined", "declined@example.com")
        .await
        .unwrap_err();

    let api_error = err.api_error().expect("expected a Stripe error");
    assert_eq!(api_error.kind(), ErrorKind::Card);
    assert_eq!(api_error.code.as_deref(), Some("card_declined"));
    assert_eq!(api_error.message, "Your card was declined.");

    harness.finish().await;
}

#[tokio::test]
async fn retrieve_missing_customer() {
    let harness = FixtureClient::new("customer_missing").await;

    let err = harness
        .client
        .retrieve_customer(&"cus_123".parse().unwrap())
        .await
        .unwrap_err();

    match err {
        ClientError::Api(api_error) => {
            assert_eq!(api_error.error_type, "invalid_request_error");
            assert_eq!(api_error.code.as_deref(), Some("resource_missing"));
            assert_eq!(api_error.param.as_deref(), Some("id"));
            assert_eq!(
                api_error.doc_url.as_deref(),
                Some("https://stripe.com/docs/error-codes/resource-missing")
            );
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    harness.finish().await;
}

#[tokio::test]
async fn invalid_api_key() {
    let harness = FixtureClient::new("invalid_key").await;

    let err = harness
        .client
        .customer("tok_amex", "test@example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::InvalidRequest));
    assert!(err.to_string().contains("Invalid API Key provided"));

    harness.finish().await;
}

// ============================================================================
// Charges
// ============================================================================

#[tokio::test]
async fn charge_new_customer() {
    let harness = FixtureClient::new("charge_create").await;

    let customer = harness
        .client
        .customer("tok_visa", "charge@example.com")
        .await
        .expect("Customer() failed");

    let charge = harness
        .client
        .charge(&customer.id, 1234)
        .await
        .expect("Charge() failed");

    assert!(charge.id.as_str().starts_with("ch_"));
    assert_eq!(charge.amount, 1234);
    assert_eq!(charge.currency, "usd");
    assert_eq!(charge.customer.as_deref(), Some(customer.id.as_str()));
    assert!(charge.paid);
    assert!(charge.succeeded());

    harness.finish().await;
}
