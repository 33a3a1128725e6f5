//! Party aggregate
//!
//! A party is identified by its national identifier and carries a
//! cumulative payout ledger plus the set of contracts it directly holds.
//! The legal form is derived from the identifier format at construction
//! and never changes.

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, ContractNumber, PartyId};

use crate::error::PartyError;
use crate::validation::classify_identifier;

/// Classification of a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegalForm {
    /// An individual, identified by a birth number
    Natural,
    /// An organization, identified by a registration number
    Legal,
}

/// A policy holder, beneficiary, or insured individual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    id: PartyId,
    legal_form: LegalForm,
    /// Cumulative claim payouts, monotonically increasing
    paid_out: Amount,
    /// Contracts held directly with the insurer, in insertion order
    contracts: Vec<ContractNumber>,
}

impl Party {
    /// Creates a party from its identifier, deriving the legal form
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or matches neither
    /// the birth-number nor the registration-number format.
    pub fn from_identifier(id: impl Into<String>) -> Result<Self, PartyError> {
        let id = id.into();
        let legal_form = classify_identifier(&id)?;

        Ok(Self {
            id: PartyId::new(id),
            legal_form,
            paid_out: Amount::ZERO,
            contracts: Vec::new(),
        })
    }

    pub fn id(&self) -> &PartyId {
        &self.id
    }

    pub fn legal_form(&self) -> LegalForm {
        self.legal_form
    }

    /// Total amount paid out to this party over all claims
    pub fn paid_out(&self) -> Amount {
        self.paid_out
    }

    /// Contracts the party directly holds, in insertion order
    pub fn contracts(&self) -> &[ContractNumber] {
        &self.contracts
    }

    pub fn holds_contract(&self, number: &ContractNumber) -> bool {
        self.contracts.contains(number)
    }

    /// Records a contract as held by this party
    pub fn add_contract(&mut self, number: ContractNumber) {
        if !self.contracts.contains(&number) {
            self.contracts.push(number);
        }
    }

    /// Removes a contract from the party's direct set (e.g. on migration
    /// into a master contract)
    pub fn remove_contract(&mut self, number: &ContractNumber) {
        self.contracts.retain(|n| n != number);
    }

    /// Credits a claim payout to this party's ledger
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not strictly positive.
    pub fn payout(&mut self, amount: Amount) -> Result<(), PartyError> {
        if !amount.is_positive() {
            return Err(PartyError::NonPositivePayout(amount.units()));
        }
        self.paid_out = self.paid_out + amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_form_from_identifier() {
        let natural = Party::from_identifier("9005121235").unwrap();
        assert_eq!(natural.legal_form(), LegalForm::Natural);

        let legal = Party::from_identifier("12345678").unwrap();
        assert_eq!(legal.legal_form(), LegalForm::Legal);
    }

    #[test]
    fn test_invalid_identifier_rejected() {
        assert!(Party::from_identifier("XYZ").is_err());
        assert_eq!(Party::from_identifier(""), Err(PartyError::EmptyIdentifier));
    }

    #[test]
    fn test_payout_ledger_is_monotone() {
        let mut party = Party::from_identifier("9005121235").unwrap();
        party.payout(Amount::new(10)).unwrap();
        party.payout(Amount::new(5)).unwrap();
        assert_eq!(party.paid_out(), Amount::new(15));
    }

    #[test]
    fn test_payout_must_be_positive() {
        let mut party = Party::from_identifier("9005121235").unwrap();
        assert_eq!(
            party.payout(Amount::ZERO),
            Err(PartyError::NonPositivePayout(0))
        );
        assert_eq!(
            party.payout(Amount::new(-3)),
            Err(PartyError::NonPositivePayout(-3))
        );
    }

    #[test]
    fn test_contract_set_deduplicates() {
        let mut party = Party::from_identifier("123456").unwrap();
        party.add_contract(ContractNumber::from("C-1"));
        party.add_contract(ContractNumber::from("C-1"));
        party.add_contract(ContractNumber::from("C-2"));
        assert_eq!(party.contracts().len(), 2);

        party.remove_contract(&ContractNumber::from("C-1"));
        assert!(!party.holds_contract(&ContractNumber::from("C-1")));
        assert!(party.holds_contract(&ContractNumber::from("C-2")));
    }
}
