//! Strongly-typed identifiers for domain entities
//!
//! Contract numbers, party identifiers, and license plates are
//! human-assigned strings; wrapping them in newtypes prevents mixing
//! one code kind with another. Payment instances get machine-generated
//! time-ordered UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_code {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new code from the raw string
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the code as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the code is empty
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_code!(
    ContractNumber,
    "Unique human-assigned identifier for an insurance agreement"
);
define_code!(
    PartyId,
    "National identifier of a party: birth number or registration number"
);
define_code!(PlateNumber, "Vehicle license plate");

/// Machine-generated identifier for a recorded payment instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new_v7()
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PAY-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_types() {
        let number = ContractNumber::from("C-001");
        assert_eq!(number.as_str(), "C-001");
        assert_eq!(number.to_string(), "C-001");
        assert!(!number.is_empty());
    }

    #[test]
    fn test_empty_code_detected() {
        assert!(ContractNumber::from("").is_empty());
    }

    #[test]
    fn test_payment_id_display_prefix() {
        let id = PaymentId::new_v7();
        assert!(id.to_string().starts_with("PAY-"));
    }
}
