//! Company Domain - the insurer orchestrator
//!
//! `InsuranceCompany` owns the contract registry, the party directory,
//! the payment ledger, and the logical clock. Every lifecycle operation
//! flows through it: issuing contracts, migrating single-vehicle
//! contracts into masters, driving premium accrual, accepting payments,
//! and settling claims.

pub mod company;

pub use company::InsuranceCompany;
