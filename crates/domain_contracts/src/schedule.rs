//! Premium payment schedules
//!
//! Each leaf contract owns one schedule tracking the premium amount, the
//! payment frequency, the next due timestamp, and the outstanding
//! balance. Accrual is a catch-up loop: a schedule untouched for many
//! periods charges all missed premiums in one call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{plus_months, Amount, CoreError};

/// Interval in months between premium charges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl PaymentFrequency {
    /// Interval length in months
    pub fn months(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 1,
            PaymentFrequency::Quarterly => 3,
            PaymentFrequency::SemiAnnual => 6,
            PaymentFrequency::Annual => 12,
        }
    }

    /// Number of premium charges per year
    pub fn payments_per_year(&self) -> i64 {
        i64::from(12 / self.months())
    }
}

/// Premium obligations of one contract
///
/// The outstanding balance is positive in arrears and negative when the
/// holder has over-paid into credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    premium: Amount,
    frequency: PaymentFrequency,
    next_payment_time: DateTime<Utc>,
    outstanding_balance: Amount,
}

impl PaymentSchedule {
    /// Creates a schedule with zero outstanding balance and the first
    /// charge due at `first_due`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the premium is not strictly positive.
    pub fn new(
        premium: Amount,
        frequency: PaymentFrequency,
        first_due: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if !premium.is_positive() {
            return Err(CoreError::invalid_argument("premium must be positive"));
        }

        Ok(Self {
            premium,
            frequency,
            next_payment_time: first_due,
            outstanding_balance: Amount::ZERO,
        })
    }

    pub fn premium(&self) -> Amount {
        self.premium
    }

    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    pub fn next_payment_time(&self) -> DateTime<Utc> {
        self.next_payment_time
    }

    pub fn outstanding_balance(&self) -> Amount {
        self.outstanding_balance
    }

    /// Charges every premium period due at `now`, advancing the due
    /// timestamp by one frequency interval per charge
    ///
    /// Returns the number of periods charged; zero when nothing was due,
    /// which makes the accrual pass idempotent per time instant.
    pub fn advance_if_due(&mut self, now: DateTime<Utc>) -> Result<u32, CoreError> {
        let mut periods = 0;
        while self.next_payment_time <= now {
            self.outstanding_balance = self.outstanding_balance.checked_add(self.premium)?;
            self.next_payment_time = plus_months(self.next_payment_time, self.frequency.months())?;
            periods += 1;
        }
        Ok(periods)
    }

    /// Subtracts a paid amount from the outstanding balance
    ///
    /// The balance may go negative, representing credit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the amount is not strictly positive.
    pub fn apply_payment(&mut self, amount: Amount) -> Result<(), CoreError> {
        if !amount.is_positive() {
            return Err(CoreError::invalid_argument(
                "payment amount must be positive",
            ));
        }
        self.outstanding_balance = self.outstanding_balance.checked_sub(amount)?;
        Ok(())
    }
}
