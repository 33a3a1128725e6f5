//! Shared error classification
//!
//! Two kinds cover every failure in the contract engine:
//!
//! - `InvalidArgument`: malformed or out-of-policy input caught at the
//!   boundary of an operation, raised before any state mutation.
//! - `InvalidContract`: a structurally valid request against a contract
//!   in the wrong relationship or state, raised before any monetary
//!   mutation.

use crate::money::MoneyError;
use crate::temporal::TemporalError;
use thiserror::Error;

/// Core error type shared across the domain crates
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid contract: {0}")]
    InvalidContract(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),
}

impl CoreError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CoreError::InvalidArgument(message.into())
    }

    pub fn invalid_contract(message: impl Into<String>) -> Self {
        CoreError::InvalidContract(message.into())
    }

    /// True for boundary-validation failures
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_) | CoreError::Money(_))
    }

    /// True for wrong-relationship or wrong-state failures
    pub fn is_invalid_contract(&self) -> bool {
        matches!(self, CoreError::InvalidContract(_))
    }
}
