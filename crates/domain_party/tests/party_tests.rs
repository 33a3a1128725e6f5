//! Behavioural tests for the party domain

use core_kernel::{Amount, ContractNumber};
use domain_party::{
    classify_identifier, is_valid_birth_number, LegalForm, Party, PartyDirectory, PartyError,
};

mod classification_tests {
    use super::*;

    #[test]
    fn test_birth_number_in_the_future_rejected() {
        // encodes 2049-01-01 with a passing checksum; the not-in-future
        // rule must still reject it
        assert!(!is_valid_birth_number("4901017000"));
    }

    #[test]
    fn test_length_boundaries() {
        assert!(!is_valid_birth_number("90051212"));
        assert!(!is_valid_birth_number("90051212356"));
    }

    #[test]
    fn test_registration_number_classifies_legal() {
        assert_eq!(classify_identifier("871234"), Ok(LegalForm::Legal));
        assert_eq!(classify_identifier("00000000"), Ok(LegalForm::Legal));
    }
}

mod party_tests {
    use super::*;

    #[test]
    fn test_party_starts_with_empty_ledger() {
        let party = Party::from_identifier("9005121235").unwrap();
        assert_eq!(party.paid_out(), Amount::ZERO);
        assert!(party.contracts().is_empty());
    }

    #[test]
    fn test_directory_tracks_contract_sets() {
        let mut directory = PartyDirectory::new();
        let id = directory.register("12345678").unwrap();

        directory
            .get_mut(&id)
            .unwrap()
            .add_contract(ContractNumber::from("M-1"));
        assert!(directory
            .get(&id)
            .unwrap()
            .holds_contract(&ContractNumber::from("M-1")));
    }

    #[test]
    fn test_invalid_and_duplicate_registration() {
        let mut directory = PartyDirectory::new();
        assert!(matches!(
            directory.register("ABC"),
            Err(PartyError::InvalidIdentifier(_))
        ));

        directory.register("9005121235").unwrap();
        assert!(matches!(
            directory.register("9005121235"),
            Err(PartyError::AlreadyRegistered(_))
        ));
    }
}
