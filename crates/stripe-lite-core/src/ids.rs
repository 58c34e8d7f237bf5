//! Identifier types for Stripe resources.
//!
//! Stripe identifiers are opaque strings carrying a resource prefix
//! (`cus_` for customers, `ch_` for charges). The `prefixed_id_type!` macro
//! generates a validated newtype for each prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to define a prefixed string identifier with standard trait implementations.
///
/// This macro generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `Serialize`, `Deserialize` (as string, validated)
/// - `FromStr`, `Display`, `Debug`
/// - `TryFrom<String>`, `Into<String>`, `AsRef<str>`
///
/// # Example
///
/// ```ignore
/// prefixed_id_type!(PriceId, "price_", "A price identifier.");
/// let id: PriceId = "price_123".parse().unwrap();
/// ```
macro_rules! prefixed_id_type {
    ($name:ident, $prefix:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// The prefix every identifier of this type starts with.
            pub const PREFIX: &'static str = $prefix;

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate(s, $prefix)?;
                Ok(Self(s.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                validate(&value, $prefix)?;
                Ok(Self(value))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

fn validate(value: &str, prefix: &'static str) -> Result<(), IdError> {
    match value.strip_prefix(prefix) {
        None => Err(IdError::MissingPrefix {
            expected: prefix,
            value: value.to_string(),
        }),
        Some("") => Err(IdError::Empty { prefix }),
        Some(_) => Ok(()),
    }
}

prefixed_id_type!(CustomerId, "cus_", "A Stripe customer identifier (`cus_...`).");
prefixed_id_type!(ChargeId, "ch_", "A Stripe charge identifier (`ch_...`).");

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input does not start with the resource prefix.
    #[error("identifier {value:?} does not start with {expected:?}")]
    MissingPrefix {
        /// The prefix that was expected.
        expected: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The input is only the prefix.
    #[error("identifier has nothing after the {prefix:?} prefix")]
    Empty {
        /// The prefix that was present.
        prefix: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_parses_with_prefix() {
        let id = CustomerId::from_str("cus_9s6XKzkNRiz8i3").unwrap();
        assert_eq!(id.as_str(), "cus_9s6XKzkNRiz8i3");
        assert_eq!(id.to_string(), "cus_9s6XKzkNRiz8i3");
    }

    #[test]
    fn customer_id_rejects_wrong_prefix() {
        let err = CustomerId::from_str("ch_123").unwrap_err();
        assert_eq!(
            err,
            IdError::MissingPrefix {
                expected: "cus_",
                value: "ch_123".to_string(),
            }
        );
    }

    #[test]
    fn charge_id_rejects_bare_prefix() {
        let err = ChargeId::from_str("ch_").unwrap_err();
        assert_eq!(err, IdError::Empty { prefix: "ch_" });
    }

    #[test]
    fn customer_id_serde_json() {
        let id: CustomerId = "cus_123".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cus_123\"");
        let parsed: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn charge_id_deserialize_validates() {
        let result: Result<ChargeId, _> = serde_json::from_str("\"cus_123\"");
        assert!(result.is_err());
    }

    #[test]
    fn debug_names_the_type() {
        let id: ChargeId = "ch_1".parse().unwrap();
        assert_eq!(format!("{id:?}"), "ChargeId(ch_1)");
    }
}
