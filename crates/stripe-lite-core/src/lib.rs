//! Stripe-lite core types.
//!
//! This crate provides the vendor-facing records shared by the client:
//!
//! - [`Customer`] and [`Charge`] resources
//! - Prefixed identifiers ([`CustomerId`], [`ChargeId`])
//! - The error envelope record ([`ApiError`]) and its classification ([`ErrorKind`])
//!
//! Nothing here performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod resources;

pub use error::{ApiError, ErrorKind};
pub use ids::{ChargeId, CustomerId, IdError};
pub use resources::{Charge, Customer};
