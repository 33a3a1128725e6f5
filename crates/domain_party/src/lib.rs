//! Party Domain - policy holders, beneficiaries, and insured persons
//!
//! A party is created from its national identifier alone: the identifier
//! format decides whether the party is a natural person (birth number)
//! or a legal entity (registration number). Parties accumulate claim
//! payouts in a monotone ledger and track the contracts they hold.

pub mod directory;
pub mod error;
pub mod party;
pub mod validation;

pub use directory::PartyDirectory;
pub use error::PartyError;
pub use party::{LegalForm, Party};
pub use validation::{classify_identifier, is_valid_birth_number, is_valid_registration_number};
