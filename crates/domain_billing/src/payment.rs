//! Payment instances
//!
//! A payment instance is an immutable record of money received at a
//! point of logical time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, CoreError, PaymentId};

/// One recorded payment against a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstance {
    id: PaymentId,
    paid_at: DateTime<Utc>,
    amount: Amount,
}

impl PaymentInstance {
    /// Creates a payment instance
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the amount is not strictly positive.
    pub fn new(paid_at: DateTime<Utc>, amount: Amount) -> Result<Self, CoreError> {
        if !amount.is_positive() {
            return Err(CoreError::invalid_argument(
                "payment amount must be positive",
            ));
        }

        Ok(Self {
            id: PaymentId::new_v7(),
            paid_at,
            amount,
        })
    }

    pub fn id(&self) -> PaymentId {
        self.id
    }

    pub fn paid_at(&self) -> DateTime<Utc> {
        self.paid_at
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}
