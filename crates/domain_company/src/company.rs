//! The insurance company
//!
//! Single-threaded and synchronous: time advances only through
//! `set_current_time`, and accrual, payments, and claims run entirely
//! within the calling thread. Every operation validates fully before
//! mutating state.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use core_kernel::{Amount, ContractNumber, CoreError, PartyId, Rate};
use domain_billing::{distribute_over_children, PaymentInstance, PaymentLedger};
use domain_contracts::{Contract, PaymentFrequency, PaymentSchedule, Vehicle};
use domain_party::{Party, PartyDirectory, PartyError};

/// Minimum annual premium as a share of the vehicle's original value
fn minimum_annual_premium_rate() -> Rate {
    Rate::from_percentage(dec!(2))
}

/// Damage threshold at which a vehicle claim is a total loss
fn total_loss_damage_rate() -> Rate {
    Rate::from_percentage(dec!(70))
}

/// Minimum annual premium per insured person on a travel contract
const TRAVEL_PREMIUM_PER_PERSON: i64 = 5;

/// Coverage granted per insured person on a travel contract
const TRAVEL_COVERAGE_PER_PERSON: i64 = 10;

/// An insurer: contract registry, party directory, payment ledger, and
/// the process clock
#[derive(Debug)]
pub struct InsuranceCompany {
    current_time: DateTime<Utc>,
    parties: PartyDirectory,
    /// Top-level contracts in insertion order; children of master
    /// contracts live nested under their master
    contracts: Vec<Contract>,
    ledger: PaymentLedger,
}

impl InsuranceCompany {
    pub fn new(current_time: DateTime<Utc>) -> Self {
        Self {
            current_time,
            parties: PartyDirectory::new(),
            contracts: Vec::new(),
            ledger: PaymentLedger::new(),
        }
    }

    pub fn current_time(&self) -> DateTime<Utc> {
        self.current_time
    }

    /// Advances the logical clock; accrual is driven separately
    pub fn set_current_time(&mut self, current_time: DateTime<Utc>) {
        self.current_time = current_time;
    }

    /// Registers a party from its national identifier
    pub fn register_party(&mut self, id: impl Into<String>) -> Result<PartyId, PartyError> {
        self.parties.register(id)
    }

    pub fn party(&self, id: &PartyId) -> Result<&Party, PartyError> {
        self.parties.get(id)
    }

    /// Top-level contracts in insertion order
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// Resolves a contract number anywhere in the registry, including
    /// children nested under a master
    pub fn find_contract(&self, number: &ContractNumber) -> Option<&Contract> {
        self.contracts.iter().find_map(|c| c.find(number))
    }

    fn find_contract_mut(&mut self, number: &ContractNumber) -> Option<&mut Contract> {
        self.contracts.iter_mut().find_map(|c| c.find_mut(number))
    }

    /// Ordered payment history of a contract
    pub fn payment_history(&self, number: &ContractNumber) -> &[PaymentInstance] {
        self.ledger.history(number)
    }

    fn assert_number_unused(&self, number: &ContractNumber) -> Result<(), CoreError> {
        if self.find_contract(number).is_some() {
            return Err(CoreError::invalid_argument(format!(
                "contract number '{number}' already exists"
            )));
        }
        Ok(())
    }

    /// Issues a single-vehicle contract
    ///
    /// The annual premium (premium times charges per year) must be at
    /// least 2% of the vehicle's original value; coverage is half the
    /// original value. The first premium is charged immediately because
    /// the schedule's first due date is the issuance instant.
    pub fn insure_vehicle(
        &mut self,
        number: ContractNumber,
        beneficiary: Option<&PartyId>,
        policy_holder: &PartyId,
        premium: Amount,
        frequency: PaymentFrequency,
        vehicle: Vehicle,
    ) -> Result<&Contract, CoreError> {
        if !premium.is_positive() {
            return Err(CoreError::invalid_argument("premium must be positive"));
        }
        self.assert_number_unused(&number)?;

        let annual_premium = premium.checked_mul(frequency.payments_per_year())?;
        if annual_premium.as_decimal() < minimum_annual_premium_rate().of(vehicle.original_value())
        {
            return Err(CoreError::invalid_argument(
                "annual premium cannot be lower than 2% of the vehicle's original value",
            ));
        }

        let coverage_amount = vehicle.original_value().halved();
        let schedule = PaymentSchedule::new(premium, frequency, self.current_time)?;

        let holder = self.parties.get(policy_holder)?;
        let beneficiary = match beneficiary {
            Some(id) => Some(self.parties.get(id)?),
            None => None,
        };

        let mut contract = Contract::single_vehicle(
            number.clone(),
            holder,
            beneficiary,
            vehicle,
            schedule,
            coverage_amount,
        )?;
        contract.charge_due(self.current_time)?;

        tracing::info!(contract = %number, holder = %policy_holder, "issued single-vehicle contract");
        self.register(contract, policy_holder)?;
        self.registered(&number)
    }

    /// Issues a travel contract over a set of natural persons
    ///
    /// The annual premium must be at least 5 per insured person;
    /// coverage is 10 per insured person.
    pub fn insure_persons(
        &mut self,
        number: ContractNumber,
        policy_holder: &PartyId,
        premium: Amount,
        frequency: PaymentFrequency,
        insured_persons: &[PartyId],
    ) -> Result<&Contract, CoreError> {
        if insured_persons.is_empty() {
            return Err(CoreError::invalid_argument(
                "insured persons cannot be empty",
            ));
        }
        if !premium.is_positive() {
            return Err(CoreError::invalid_argument("premium must be positive"));
        }
        self.assert_number_unused(&number)?;

        let mut distinct: Vec<&PartyId> = Vec::new();
        for id in insured_persons {
            if !distinct.contains(&id) {
                distinct.push(id);
            }
        }
        let person_count = distinct.len() as i64;

        let annual_premium = premium.checked_mul(frequency.payments_per_year())?;
        if annual_premium.units() < TRAVEL_PREMIUM_PER_PERSON * person_count {
            return Err(CoreError::invalid_argument(
                "annual premium must be at least 5 times the number of insured persons",
            ));
        }

        let coverage_amount = Amount::new(TRAVEL_COVERAGE_PER_PERSON * person_count);
        let schedule = PaymentSchedule::new(premium, frequency, self.current_time)?;

        let holder = self.parties.get(policy_holder)?;
        let mut persons: Vec<&Party> = Vec::with_capacity(distinct.len());
        for id in &distinct {
            persons.push(self.parties.get(id)?);
        }

        let mut contract =
            Contract::travel(number.clone(), holder, &persons, schedule, coverage_amount)?;
        contract.charge_due(self.current_time)?;

        tracing::info!(contract = %number, persons = person_count, "issued travel contract");
        self.register(contract, policy_holder)?;
        self.registered(&number)
    }

    /// Creates an empty master vehicle contract for a legal-entity holder
    ///
    /// No schedule and no initial charge; payments and accrual route
    /// through the children.
    pub fn create_master_vehicle_contract(
        &mut self,
        number: ContractNumber,
        beneficiary: Option<&PartyId>,
        policy_holder: &PartyId,
    ) -> Result<&Contract, CoreError> {
        self.assert_number_unused(&number)?;

        let holder = self.parties.get(policy_holder)?;
        let beneficiary = match beneficiary {
            Some(id) => Some(self.parties.get(id)?),
            None => None,
        };

        let contract = Contract::master(number.clone(), holder, beneficiary)?;

        tracing::info!(contract = %number, holder = %policy_holder, "created master vehicle contract");
        self.register(contract, policy_holder)?;
        self.registered(&number)
    }

    fn register(&mut self, contract: Contract, policy_holder: &PartyId) -> Result<(), CoreError> {
        let number = contract.number().clone();
        self.contracts.push(contract);
        self.parties.get_mut(policy_holder)?.add_contract(number);
        Ok(())
    }

    fn registered(&self, number: &ContractNumber) -> Result<&Contract, CoreError> {
        self.find_contract(number)
            .ok_or_else(|| CoreError::invalid_contract("contract was not registered"))
    }

    /// Moves a registered single-vehicle contract under a registered
    /// master contract
    ///
    /// Validation is check-then-commit: every admission condition is
    /// verified before the contract leaves the top-level registry and
    /// the holder's direct set, so a failed move changes nothing.
    pub fn move_single_vehicle_contract_to_master_vehicle_contract(
        &mut self,
        master_number: &ContractNumber,
        single_number: &ContractNumber,
    ) -> Result<(), CoreError> {
        let master_idx = self.top_level_index(master_number)?;
        let single_idx = self.top_level_index(single_number)?;

        let master = &self.contracts[master_idx];
        let single = &self.contracts[single_idx];

        if !master.is_master() {
            return Err(CoreError::invalid_contract(
                "target contract is not a master vehicle contract",
            ));
        }
        if !single.is_single_vehicle() {
            return Err(CoreError::invalid_contract(
                "moved contract is not a single-vehicle contract",
            ));
        }
        if !master.is_active() || !single.is_active() {
            return Err(CoreError::invalid_contract(
                "both contracts must be active",
            ));
        }
        if master.policy_holder() != single.policy_holder() {
            return Err(CoreError::invalid_contract(
                "both contracts must have the same policy holder",
            ));
        }

        let holder_id = master.policy_holder().clone();
        let holder = self.parties.get(&holder_id)?;
        if !holder.holds_contract(master_number) || !holder.holds_contract(single_number) {
            return Err(CoreError::invalid_contract(
                "policy holder does not hold both contracts",
            ));
        }

        // Commit: registry removal, holder-set removal, and admission
        // are preceded by the full validation above.
        let child = self.contracts.remove(single_idx);
        let master_idx = if single_idx < master_idx {
            master_idx - 1
        } else {
            master_idx
        };
        self.parties
            .get_mut(&holder_id)?
            .remove_contract(single_number);
        self.contracts[master_idx].admit_child(child)?;

        tracing::info!(master = %master_number, child = %single_number, "migrated contract into master");
        Ok(())
    }

    fn top_level_index(&self, number: &ContractNumber) -> Result<usize, CoreError> {
        self.contracts
            .iter()
            .position(|c| c.number() == number)
            .ok_or_else(|| {
                CoreError::invalid_contract(format!(
                    "contract '{number}' is not registered with this insurer"
                ))
            })
    }

    /// Runs the accrual pass over every active top-level contract
    pub fn charge_premiums_on_contracts(&mut self) -> Result<(), CoreError> {
        let now = self.current_time;
        for contract in self.contracts.iter_mut() {
            if contract.is_active() {
                contract.charge_due(now)?;
            }
        }
        Ok(())
    }

    /// Runs the accrual pass on one contract, including a child nested
    /// under a master; a no-op for inactive leaf contracts
    pub fn charge_premium_on_contract(&mut self, number: &ContractNumber) -> Result<(), CoreError> {
        let now = self.current_time;
        let contract = self.find_contract_mut(number).ok_or_else(|| {
            CoreError::invalid_contract(format!(
                "contract '{number}' is not registered with this insurer"
            ))
        })?;
        contract.charge_due(now)
    }

    /// Applies a payment to a contract
    ///
    /// For a master contract the amount is distributed over its active
    /// children and a single payment instance is recorded against the
    /// master; for a leaf contract the full amount is subtracted from
    /// its outstanding balance, possibly into credit. Migrated children
    /// can be paid directly by their own number.
    pub fn pay(&mut self, number: &ContractNumber, amount: Amount) -> Result<(), CoreError> {
        if !amount.is_positive() {
            return Err(CoreError::invalid_argument(
                "payment amount must be positive",
            ));
        }

        let now = self.current_time;
        let contract = self.find_contract_mut(number).ok_or_else(|| {
            CoreError::invalid_contract(format!(
                "contract '{number}' is not registered with this insurer"
            ))
        })?;
        if !contract.is_active() {
            return Err(CoreError::invalid_contract("contract is not active"));
        }

        if contract.is_master() {
            let children = contract
                .children_mut()
                .ok_or_else(|| CoreError::invalid_contract("contract is not a master"))?;
            if children.is_empty() {
                return Err(CoreError::invalid_contract(
                    "master contract has no child contracts",
                ));
            }
            let remainder = distribute_over_children(children, amount)?;
            tracing::debug!(contract = %number, %amount, %remainder, "distributed master payment");
        } else {
            let schedule = contract
                .schedule_mut()
                .ok_or_else(|| CoreError::invalid_contract("contract has no payment schedule"))?;
            schedule.apply_payment(amount)?;
            tracing::debug!(contract = %number, %amount, "applied payment");
        }

        let instance = PaymentInstance::new(now, amount)?;
        self.ledger.record(number.clone(), instance);
        Ok(())
    }

    /// Settles a travel claim for a subset of the insured persons
    ///
    /// The coverage amount is split evenly by integer division across
    /// the affected persons; the contract is deactivated afterwards
    /// regardless of any remainder.
    pub fn process_travel_claim(
        &mut self,
        number: &ContractNumber,
        affected_persons: &[PartyId],
    ) -> Result<(), CoreError> {
        if affected_persons.is_empty() {
            return Err(CoreError::invalid_argument(
                "affected persons cannot be empty",
            ));
        }

        let contract = self.registered(number)?;
        let insured = contract.insured_persons().ok_or_else(|| {
            CoreError::invalid_argument("contract is not a travel contract")
        })?;

        let mut affected: Vec<PartyId> = Vec::new();
        for id in affected_persons {
            if !insured.contains(id) {
                return Err(CoreError::invalid_argument(format!(
                    "person '{id}' is not insured under this contract"
                )));
            }
            if !affected.contains(id) {
                affected.push(id.clone());
            }
        }

        if !contract.is_active() {
            return Err(CoreError::invalid_contract("contract is not active"));
        }

        let payout_per_person = contract
            .coverage_amount()
            .split_evenly(affected.len() as u32)?;

        for person in &affected {
            self.parties.payout(person, payout_per_person)?;
        }

        // travel claims are single-use
        if let Some(contract) = self.find_contract_mut(number) {
            contract.deactivate();
        }

        tracing::info!(contract = %number, affected = affected.len(), %payout_per_person, "settled travel claim");
        Ok(())
    }

    /// Settles a vehicle claim
    ///
    /// The full coverage amount is paid to the beneficiary, falling back
    /// to the policy holder. The contract is deactivated only when the
    /// expected damages reach 70% of the vehicle's original value.
    pub fn process_vehicle_claim(
        &mut self,
        number: &ContractNumber,
        expected_damages: Amount,
    ) -> Result<(), CoreError> {
        if !expected_damages.is_positive() {
            return Err(CoreError::invalid_argument(
                "expected damages must be positive",
            ));
        }

        let contract = self.registered(number)?;
        let vehicle = contract.vehicle().ok_or_else(|| {
            CoreError::invalid_argument("contract is not a single-vehicle contract")
        })?;

        if !contract.is_active() {
            return Err(CoreError::invalid_contract("contract is not active"));
        }

        let recipient = contract
            .beneficiary()
            .unwrap_or_else(|| contract.policy_holder())
            .clone();
        let payout = contract.coverage_amount();
        let total_loss =
            expected_damages.as_decimal() >= total_loss_damage_rate().of(vehicle.original_value());

        self.parties.payout(&recipient, payout)?;

        if total_loss {
            if let Some(contract) = self.find_contract_mut(number) {
                contract.deactivate();
            }
        }

        tracing::info!(contract = %number, recipient = %recipient, %payout, total_loss, "settled vehicle claim");
        Ok(())
    }

    /// Manually deactivates a contract; on a master this cascades to
    /// every child
    pub fn deactivate_contract(&mut self, number: &ContractNumber) -> Result<(), CoreError> {
        let contract = self.find_contract_mut(number).ok_or_else(|| {
            CoreError::invalid_contract(format!(
                "contract '{number}' is not registered with this insurer"
            ))
        })?;
        contract.deactivate();
        Ok(())
    }
}
