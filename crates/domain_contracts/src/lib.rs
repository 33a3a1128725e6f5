//! Contract Domain - the insurance agreement entity and its lifecycle
//!
//! This crate models the polymorphic contract:
//!
//! - `SingleVehicle` covers one vehicle and owns a premium schedule
//! - `Travel` covers a set of natural persons and owns a premium schedule
//! - `Master` aggregates single-vehicle contracts under one legal-entity
//!   holder and has no schedule of its own
//!
//! Activity is a flat active/inactive state machine; a master's observed
//! activity is derived from its children, and deactivating a master
//! cascades to every child.

pub mod asset;
pub mod contract;
pub mod schedule;

pub use asset::Vehicle;
pub use contract::{Contract, ContractTerms};
pub use schedule::{PaymentFrequency, PaymentSchedule};
