//! Billing Domain - payment recording and distribution
//!
//! Two concerns live here:
//!
//! - The **payment ledger**: an ordered history of payment instances per
//!   contract, sorted by payment timestamp with insertion order breaking
//!   ties so equal-timestamp payments are never collapsed.
//! - The **master-payment allocator**: the two-phase algorithm that
//!   spreads one payment over a master contract's active children,
//!   first clearing arrears in iteration order, then advancing credit
//!   in premium-sized passes.

pub mod allocation;
pub mod ledger;
pub mod payment;

pub use allocation::distribute_over_children;
pub use ledger::PaymentLedger;
pub use payment::PaymentInstance;
