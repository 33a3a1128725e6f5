//! Master-contract payment distribution
//!
//! One payment against a master contract is spread over its active
//! children in two phases:
//!
//! 1. **Arrears**: children with a positive outstanding balance are
//!    paid down in iteration order, each receiving at most its balance,
//!    until the amount runs out.
//! 2. **Advance**: any remainder is applied in repeated passes over the
//!    active children, at most one premium per child per pass, driving
//!    balances into credit. A pass that deducts nothing ends the loop.
//!
//! The caller records a single payment instance for the full amount
//! against the master, not against individual children.

use core_kernel::{Amount, CoreError};
use domain_contracts::Contract;

/// Distributes `amount` over the active children of a master contract
///
/// Children are mutated in place; returns the undistributed remainder
/// (non-zero only when no active child has a positive premium).
pub fn distribute_over_children(
    children: &mut [Contract],
    amount: Amount,
) -> Result<Amount, CoreError> {
    let mut remaining = amount;

    // Phase 1: clear arrears in iteration order
    for child in children.iter_mut() {
        if remaining.is_zero() {
            break;
        }
        if !child.is_active() {
            continue;
        }
        let Some(schedule) = child.schedule_mut() else {
            continue;
        };

        let outstanding = schedule.outstanding_balance();
        if outstanding.is_positive() {
            let applied = remaining.min(outstanding);
            schedule.apply_payment(applied)?;
            remaining = remaining - applied;
        }
    }

    tracing::debug!(remaining = %remaining, "arrears phase complete");

    // Phase 2: premium-sized passes into credit
    while remaining.is_positive() {
        let mut deducted = false;
        for child in children.iter_mut() {
            if !child.is_active() {
                continue;
            }
            let Some(schedule) = child.schedule_mut() else {
                continue;
            };

            let premium = schedule.premium();
            if premium.is_positive() {
                let applied = remaining.min(premium);
                schedule.apply_payment(applied)?;
                remaining = remaining - applied;
                deducted = true;
                if remaining.is_zero() {
                    break;
                }
            }
        }
        if !deducted {
            break;
        }
    }

    Ok(remaining)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_kernel::ContractNumber;
    use domain_contracts::{PaymentFrequency, PaymentSchedule, Vehicle};
    use domain_party::Party;
    use proptest::prelude::*;

    fn active_child(number: String, premium: i64) -> Contract {
        let holder = Party::from_identifier("12345678").unwrap();
        let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let vehicle = Vehicle::new("AA111BB", Amount::new(100_000)).unwrap();
        let schedule =
            PaymentSchedule::new(Amount::new(premium), PaymentFrequency::Monthly, epoch).unwrap();
        Contract::single_vehicle(
            ContractNumber::new(number),
            &holder,
            None,
            vehicle,
            schedule,
            Amount::new(50_000),
        )
        .unwrap()
    }

    proptest! {
        #[test]
        fn distribution_conserves_money(
            premiums in prop::collection::vec(1i64..500i64, 1..6),
            amount in 1i64..10_000i64,
        ) {
            let mut children: Vec<Contract> = premiums
                .iter()
                .enumerate()
                .map(|(i, p)| active_child(format!("S-{i}"), *p))
                .collect();

            let before: Amount = children
                .iter()
                .map(|c| c.schedule().unwrap().outstanding_balance())
                .sum();

            let remainder =
                distribute_over_children(&mut children, Amount::new(amount)).unwrap();

            let after: Amount = children
                .iter()
                .map(|c| c.schedule().unwrap().outstanding_balance())
                .sum();

            // every unit either lowered a balance or came back as remainder
            prop_assert_eq!(before - after + remainder, Amount::new(amount));
            // active children with positive premium always absorb everything
            prop_assert_eq!(remainder, Amount::ZERO);
        }
    }
}
