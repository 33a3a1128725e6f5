//! Core Kernel - Foundational types for the contract accounting engine
//!
//! This crate provides the building blocks used across all domain modules:
//! - Fixed-point integer amounts and percentage rates
//! - Temporal helpers for schedule due-date stepping
//! - Common identifiers and value objects
//! - The shared error classification for boundary validation

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Amount, MoneyError, Rate};
pub use temporal::{plus_months, TemporalError};
pub use identifiers::{ContractNumber, PartyId, PaymentId, PlateNumber};
pub use error::CoreError;
