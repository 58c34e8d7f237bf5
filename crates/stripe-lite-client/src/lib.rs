//! Stripe-lite client.
//!
//! A small client for creating Stripe customers and charges. Requests go
//! through a [`Transport`], so tests can replay recorded fixtures instead of
//! calling the live API.
//!
//! # Example
//!
//! ```no_run
//! use stripe_lite_client::StripeClient;
//!
//! # async fn example() -> Result<(), stripe_lite_client::ClientError> {
//! let client = StripeClient::new("sk_test_...")?;
//!
//! let customer = client.customer("tok_amex", "jenny@example.com").await?;
//! let charge = client.charge(&customer.id, 1099).await?;
//!
//! println!("charged {} {}", charge.amount, charge.currency);
//! # Ok(())
//! # }
//! ```
//!
//! # Fixtures
//!
//! [`FixtureTransport`] replays a file of recorded exchanges;
//! [`RecordingTransport`] wraps a live transport and writes one.
//! [`FixtureMode::from_env`] picks between them from `STRIPE_FIXTURES`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod decode;
mod error;
mod fixture;
mod request;
mod transport;
mod types;

pub use client::StripeClient;
pub use config::ClientConfig;
pub use decode::decode;
pub use error::{ClientError, TransportError};
pub use fixture::{Exchange, FixtureMode, FixtureTransport, RecordingTransport};
pub use request::{ApiRequest, Method, RequestBuilder};
pub use transport::{ApiResponse, HttpTransport, Transport};
pub use types::{ChargeParams, CustomerParams};

pub use stripe_lite_core::{ApiError, Charge, ChargeId, Customer, CustomerId, ErrorKind, IdError};
