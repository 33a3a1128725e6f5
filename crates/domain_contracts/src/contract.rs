//! The contract entity
//!
//! One flat entity with three variants instead of an inheritance chain.
//! Shared capability set: contract number, policy holder, coverage
//! amount, activity, schedule access, recursive lookup, and accrual.
//!
//! # Invariants
//!
//! - The contract number never changes after construction
//! - A master contract has no schedule of its own; accrual and payment
//!   route exclusively through its children
//! - A master's observed activity is the OR of its children's activity
//!   while it has children; its own flag applies only when childless
//! - Deactivating a master cascades to every child before setting its
//!   own flag

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, ContractNumber, CoreError, PartyId};
use domain_party::{LegalForm, Party};

use crate::asset::Vehicle;
use crate::schedule::PaymentSchedule;

/// Per-variant data of a contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContractTerms {
    /// Covers one vehicle; owns a premium schedule
    SingleVehicle {
        beneficiary: Option<PartyId>,
        vehicle: Vehicle,
        schedule: PaymentSchedule,
    },
    /// Covers a set of natural persons; owns a premium schedule
    Travel {
        insured_persons: Vec<PartyId>,
        schedule: PaymentSchedule,
    },
    /// Aggregates single-vehicle contracts; no schedule of its own
    Master {
        beneficiary: Option<PartyId>,
        children: Vec<Contract>,
    },
}

/// An insurance agreement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    number: ContractNumber,
    policy_holder: PartyId,
    coverage_amount: Amount,
    active: bool,
    terms: ContractTerms,
}

impl Contract {
    fn validate_common(number: &ContractNumber, coverage_amount: Amount) -> Result<(), CoreError> {
        if number.is_empty() {
            return Err(CoreError::invalid_argument(
                "contract number cannot be empty",
            ));
        }
        if coverage_amount.is_negative() {
            return Err(CoreError::invalid_argument(
                "coverage amount cannot be negative",
            ));
        }
        Ok(())
    }

    /// Creates a single-vehicle contract
    pub fn single_vehicle(
        number: ContractNumber,
        policy_holder: &Party,
        beneficiary: Option<&Party>,
        vehicle: Vehicle,
        schedule: PaymentSchedule,
        coverage_amount: Amount,
    ) -> Result<Self, CoreError> {
        Self::validate_common(&number, coverage_amount)?;

        Ok(Self {
            number,
            policy_holder: policy_holder.id().clone(),
            coverage_amount,
            active: true,
            terms: ContractTerms::SingleVehicle {
                beneficiary: beneficiary.map(|p| p.id().clone()),
                vehicle,
                schedule,
            },
        })
    }

    /// Creates a travel contract covering `insured_persons`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the insured set is empty or contains
    /// a party that is not a natural person.
    pub fn travel(
        number: ContractNumber,
        policy_holder: &Party,
        insured_persons: &[&Party],
        schedule: PaymentSchedule,
        coverage_amount: Amount,
    ) -> Result<Self, CoreError> {
        Self::validate_common(&number, coverage_amount)?;

        if insured_persons.is_empty() {
            return Err(CoreError::invalid_argument(
                "insured persons cannot be empty",
            ));
        }
        if insured_persons
            .iter()
            .any(|p| p.legal_form() != LegalForm::Natural)
        {
            return Err(CoreError::invalid_argument(
                "every insured person must be a natural person",
            ));
        }

        let mut ids: Vec<PartyId> = Vec::with_capacity(insured_persons.len());
        for person in insured_persons {
            if !ids.contains(person.id()) {
                ids.push(person.id().clone());
            }
        }

        Ok(Self {
            number,
            policy_holder: policy_holder.id().clone(),
            coverage_amount,
            active: true,
            terms: ContractTerms::Travel {
                insured_persons: ids,
                schedule,
            },
        })
    }

    /// Creates an empty master vehicle contract
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless the policy holder is a legal
    /// entity.
    pub fn master(
        number: ContractNumber,
        policy_holder: &Party,
        beneficiary: Option<&Party>,
    ) -> Result<Self, CoreError> {
        Self::validate_common(&number, Amount::ZERO)?;

        if policy_holder.legal_form() != LegalForm::Legal {
            return Err(CoreError::invalid_argument(
                "master contract policy holder must be a legal entity",
            ));
        }

        Ok(Self {
            number,
            policy_holder: policy_holder.id().clone(),
            coverage_amount: Amount::ZERO,
            active: true,
            terms: ContractTerms::Master {
                beneficiary: beneficiary.map(|p| p.id().clone()),
                children: Vec::new(),
            },
        })
    }

    pub fn number(&self) -> &ContractNumber {
        &self.number
    }

    pub fn policy_holder(&self) -> &PartyId {
        &self.policy_holder
    }

    pub fn coverage_amount(&self) -> Amount {
        self.coverage_amount
    }

    pub fn terms(&self) -> &ContractTerms {
        &self.terms
    }

    pub fn beneficiary(&self) -> Option<&PartyId> {
        match &self.terms {
            ContractTerms::SingleVehicle { beneficiary, .. }
            | ContractTerms::Master { beneficiary, .. } => beneficiary.as_ref(),
            ContractTerms::Travel { .. } => None,
        }
    }

    pub fn is_single_vehicle(&self) -> bool {
        matches!(self.terms, ContractTerms::SingleVehicle { .. })
    }

    pub fn is_travel(&self) -> bool {
        matches!(self.terms, ContractTerms::Travel { .. })
    }

    pub fn is_master(&self) -> bool {
        matches!(self.terms, ContractTerms::Master { .. })
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        match &self.terms {
            ContractTerms::SingleVehicle { vehicle, .. } => Some(vehicle),
            _ => None,
        }
    }

    pub fn insured_persons(&self) -> Option<&[PartyId]> {
        match &self.terms {
            ContractTerms::Travel {
                insured_persons, ..
            } => Some(insured_persons),
            _ => None,
        }
    }

    /// The contract's own premium schedule; a master has none
    pub fn schedule(&self) -> Option<&PaymentSchedule> {
        match &self.terms {
            ContractTerms::SingleVehicle { schedule, .. }
            | ContractTerms::Travel { schedule, .. } => Some(schedule),
            ContractTerms::Master { .. } => None,
        }
    }

    pub fn schedule_mut(&mut self) -> Option<&mut PaymentSchedule> {
        match &mut self.terms {
            ContractTerms::SingleVehicle { schedule, .. }
            | ContractTerms::Travel { schedule, .. } => Some(schedule),
            ContractTerms::Master { .. } => None,
        }
    }

    /// Child contracts of a master; `None` for leaf contracts
    pub fn children(&self) -> Option<&[Contract]> {
        match &self.terms {
            ContractTerms::Master { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Contract>> {
        match &mut self.terms {
            ContractTerms::Master { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Observed activity
    ///
    /// A master with children is active iff at least one child is; a
    /// childless master and every leaf contract report their own flag.
    pub fn is_active(&self) -> bool {
        match &self.terms {
            ContractTerms::Master { children, .. } if !children.is_empty() => {
                children.iter().any(|c| c.is_active())
            }
            _ => self.active,
        }
    }

    /// Deactivates the contract; on a master this cascades to every
    /// child before setting the master's own flag
    pub fn deactivate(&mut self) {
        if let ContractTerms::Master { children, .. } = &mut self.terms {
            for child in children.iter_mut() {
                child.deactivate();
            }
        }
        self.active = false;
    }

    /// True if `number` identifies this contract or any nested child
    pub fn contains_number(&self, number: &ContractNumber) -> bool {
        self.find(number).is_some()
    }

    /// Resolves a contract number within this contract's tree
    pub fn find(&self, number: &ContractNumber) -> Option<&Contract> {
        if &self.number == number {
            return Some(self);
        }
        self.children()?
            .iter()
            .find_map(|child| child.find(number))
    }

    pub fn find_mut(&mut self, number: &ContractNumber) -> Option<&mut Contract> {
        if &self.number == number {
            return Some(self);
        }
        self.children_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(number))
    }

    /// Admits a single-vehicle contract as a child of this master
    ///
    /// # Errors
    ///
    /// Returns `InvalidContract` if this contract is not a master, and
    /// `InvalidArgument` if the child is not a single-vehicle contract,
    /// is already present, or has a different policy holder.
    pub fn admit_child(&mut self, child: Contract) -> Result<(), CoreError> {
        if !child.is_single_vehicle() {
            return Err(CoreError::invalid_argument(
                "only single-vehicle contracts can join a master contract",
            ));
        }
        if child.policy_holder != self.policy_holder {
            return Err(CoreError::invalid_argument(
                "child contract must have the same policy holder as the master",
            ));
        }

        match &mut self.terms {
            ContractTerms::Master { children, .. } => {
                if children.iter().any(|c| c.number == child.number) {
                    return Err(CoreError::invalid_argument(
                        "child contract is already present in the master",
                    ));
                }
                children.push(child);
                Ok(())
            }
            _ => Err(CoreError::invalid_contract(
                "contract is not a master vehicle contract",
            )),
        }
    }

    /// Runs the accrual pass at `now`
    ///
    /// A master recurses into every child; a leaf charges its own
    /// schedule when active and is a no-op when inactive.
    pub fn charge_due(&mut self, now: DateTime<Utc>) -> Result<(), CoreError> {
        if let ContractTerms::Master { children, .. } = &mut self.terms {
            for child in children.iter_mut() {
                child.charge_due(now)?;
            }
            return Ok(());
        }

        if self.active {
            if let Some(schedule) = self.schedule_mut() {
                schedule.advance_if_due(now)?;
            }
        }
        Ok(())
    }
}
