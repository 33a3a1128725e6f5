//! Party directory
//!
//! Central registry of parties known to one insurer, keyed by national
//! identifier. Claim payouts and the party-side contract sets are
//! mutated through the directory, keeping the company the only writer.

use std::collections::HashMap;

use core_kernel::{Amount, PartyId};

use crate::error::PartyError;
use crate::party::{LegalForm, Party};

/// Registry of all parties known to an insurer
#[derive(Debug, Default)]
pub struct PartyDirectory {
    parties: HashMap<PartyId, Party>,
}

impl PartyDirectory {
    pub fn new() -> Self {
        Self {
            parties: HashMap::new(),
        }
    }

    /// Registers a new party from its identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is invalid or already taken.
    pub fn register(&mut self, id: impl Into<String>) -> Result<PartyId, PartyError> {
        let party = Party::from_identifier(id)?;
        let party_id = party.id().clone();

        if self.parties.contains_key(&party_id) {
            return Err(PartyError::AlreadyRegistered(party_id));
        }

        tracing::debug!(party = %party_id, form = ?party.legal_form(), "registered party");
        self.parties.insert(party_id.clone(), party);
        Ok(party_id)
    }

    pub fn contains(&self, id: &PartyId) -> bool {
        self.parties.contains_key(id)
    }

    pub fn get(&self, id: &PartyId) -> Result<&Party, PartyError> {
        self.parties
            .get(id)
            .ok_or_else(|| PartyError::NotRegistered(id.clone()))
    }

    pub fn get_mut(&mut self, id: &PartyId) -> Result<&mut Party, PartyError> {
        self.parties
            .get_mut(id)
            .ok_or_else(|| PartyError::NotRegistered(id.clone()))
    }

    /// Legal form of a registered party
    pub fn legal_form(&self, id: &PartyId) -> Result<LegalForm, PartyError> {
        Ok(self.get(id)?.legal_form())
    }

    /// Credits a claim payout to a registered party
    pub fn payout(&mut self, id: &PartyId, amount: Amount) -> Result<(), PartyError> {
        self.get_mut(id)?.payout(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut directory = PartyDirectory::new();
        let id = directory.register("9005121235").unwrap();

        assert!(directory.contains(&id));
        assert_eq!(directory.legal_form(&id), Ok(LegalForm::Natural));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut directory = PartyDirectory::new();
        directory.register("123456").unwrap();

        assert!(matches!(
            directory.register("123456"),
            Err(PartyError::AlreadyRegistered(_))
        ));
    }

    #[test]
    fn test_payout_to_unknown_party_fails() {
        let mut directory = PartyDirectory::new();
        let unknown = PartyId::from("123456");

        assert_eq!(
            directory.payout(&unknown, Amount::new(10)),
            Err(PartyError::NotRegistered(unknown))
        );
    }

    #[test]
    fn test_payout_routes_to_ledger() {
        let mut directory = PartyDirectory::new();
        let id = directory.register("9005121235").unwrap();

        directory.payout(&id, Amount::new(25)).unwrap();
        assert_eq!(directory.get(&id).unwrap().paid_out(), Amount::new(25));
    }
}
