//! Payment history ledger
//!
//! Per-contract ordered histories. Instances are kept sorted by payment
//! timestamp; instances sharing a timestamp stay in insertion order, so
//! two payments at the same logical instant are both retained.

use std::collections::HashMap;

use core_kernel::{Amount, ContractNumber};

use crate::payment::PaymentInstance;

/// Ordered payment history per contract
#[derive(Debug, Default)]
pub struct PaymentLedger {
    history: HashMap<ContractNumber, Vec<PaymentInstance>>,
}

impl PaymentLedger {
    pub fn new() -> Self {
        Self {
            history: HashMap::new(),
        }
    }

    /// Records a payment instance against a contract
    ///
    /// The instance is inserted after every existing instance with an
    /// earlier or equal timestamp.
    pub fn record(&mut self, contract: ContractNumber, instance: PaymentInstance) {
        let entries = self.history.entry(contract).or_default();
        let at = entries.partition_point(|existing| existing.paid_at() <= instance.paid_at());
        entries.insert(at, instance);
    }

    /// Ordered payment history of one contract
    pub fn history(&self, contract: &ContractNumber) -> &[PaymentInstance] {
        self.history
            .get(contract)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sum of all recorded payments for one contract
    pub fn total_paid(&self, contract: &ContractNumber) -> Amount {
        self.history(contract).iter().map(|p| p.amount()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn number() -> ContractNumber {
        ContractNumber::from("C-1")
    }

    fn instance(day: u32, amount: i64) -> PaymentInstance {
        let at = Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap();
        PaymentInstance::new(at, Amount::new(amount)).unwrap()
    }

    #[test]
    fn test_history_sorted_by_timestamp() {
        let mut ledger = PaymentLedger::new();
        ledger.record(number(), instance(5, 10));
        ledger.record(number(), instance(2, 20));
        ledger.record(number(), instance(9, 30));

        let amounts: Vec<i64> = ledger
            .history(&number())
            .iter()
            .map(|p| p.amount().units())
            .collect();
        assert_eq!(amounts, vec![20, 10, 30]);
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        let mut ledger = PaymentLedger::new();
        ledger.record(number(), instance(1, 10));
        ledger.record(number(), instance(1, 20));
        ledger.record(number(), instance(1, 10));

        let amounts: Vec<i64> = ledger
            .history(&number())
            .iter()
            .map(|p| p.amount().units())
            .collect();
        // nothing dropped, original order preserved
        assert_eq!(amounts, vec![10, 20, 10]);
    }

    #[test]
    fn test_unknown_contract_has_empty_history() {
        let ledger = PaymentLedger::new();
        assert!(ledger.history(&number()).is_empty());
        assert_eq!(ledger.total_paid(&number()), Amount::ZERO);
    }

    #[test]
    fn test_total_paid() {
        let mut ledger = PaymentLedger::new();
        ledger.record(number(), instance(1, 10));
        ledger.record(number(), instance(2, 25));
        assert_eq!(ledger.total_paid(&number()), Amount::new(35));
    }
}
