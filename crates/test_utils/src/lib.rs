//! Test Utilities Crate
//!
//! Shared fixtures and builders for the contract engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: valid national identifiers, vehicles, and reference times
//! - `builders`: a pre-wired company harness for behavioural tests

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
