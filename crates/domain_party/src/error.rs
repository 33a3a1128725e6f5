//! Party domain errors

use core_kernel::{CoreError, PartyId};
use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    /// Identifier is empty
    #[error("Party identifier cannot be empty")]
    EmptyIdentifier,

    /// Identifier is neither a birth number nor a registration number
    #[error("Party identifier is not valid: {0}")]
    InvalidIdentifier(String),

    /// A party with this identifier already exists
    #[error("Party already registered: {0}")]
    AlreadyRegistered(PartyId),

    /// No party with this identifier exists
    #[error("Party not registered: {0}")]
    NotRegistered(PartyId),

    /// Payout amounts must be strictly positive
    #[error("Payout amount must be positive, got {0}")]
    NonPositivePayout(i64),
}

impl From<PartyError> for CoreError {
    fn from(error: PartyError) -> Self {
        CoreError::invalid_argument(error.to_string())
    }
}
