//! Test data builders
//!
//! The company harness wires up an insurer with a registered legal
//! entity and a few natural persons so behavioural tests only spell out
//! the step under test.

use core_kernel::{Amount, ContractNumber, PartyId};
use domain_company::InsuranceCompany;
use domain_contracts::{PaymentFrequency, Vehicle};

use crate::fixtures::{IdentityFixtures, TemporalFixtures, VehicleFixtures};

/// A company with pre-registered parties
pub struct CompanyHarness {
    pub company: InsuranceCompany,
    /// Legal-entity holder, eligible for master contracts
    pub firm: PartyId,
    /// Natural-person holder
    pub person: PartyId,
    /// A second natural person, usable as beneficiary or insured
    pub second_person: PartyId,
}

impl CompanyHarness {
    /// Builds a company at the reference issuance time
    pub fn new() -> Self {
        let mut company = InsuranceCompany::new(TemporalFixtures::issuance_time());
        let firm = company
            .register_party(IdentityFixtures::legal_id())
            .expect("fixture id is valid");
        let person = company
            .register_party(IdentityFixtures::natural_id())
            .expect("fixture id is valid");
        let second_person = company
            .register_party(IdentityFixtures::second_natural_id())
            .expect("fixture id is valid");

        Self {
            company,
            firm,
            person,
            second_person,
        }
    }

    /// Issues a single-vehicle contract for the firm on the standard
    /// vehicle; premium 100, monthly
    pub fn issue_firm_vehicle(&mut self, number: &str) -> ContractNumber {
        self.issue_vehicle_for(number, VehicleFixtures::standard(), &self.firm.clone())
    }

    /// Issues a single-vehicle contract for the given holder
    pub fn issue_vehicle_for(
        &mut self,
        number: &str,
        vehicle: Vehicle,
        holder: &PartyId,
    ) -> ContractNumber {
        let number = ContractNumber::from(number);
        self.company
            .insure_vehicle(
                number.clone(),
                None,
                holder,
                Amount::new(100),
                PaymentFrequency::Monthly,
                vehicle,
            )
            .expect("fixture contract is valid");
        number
    }

    /// Creates a master contract for the firm
    pub fn create_firm_master(&mut self, number: &str) -> ContractNumber {
        let number = ContractNumber::from(number);
        self.company
            .create_master_vehicle_contract(number.clone(), None, &self.firm.clone())
            .expect("fixture master is valid");
        number
    }

    /// Issues a vehicle contract for the firm and moves it under the
    /// given master
    pub fn issue_child_under(&mut self, master: &ContractNumber, number: &str, vehicle: Vehicle) {
        let child = self.issue_vehicle_for(number, vehicle, &self.firm.clone());
        self.company
            .move_single_vehicle_contract_to_master_vehicle_contract(master, &child)
            .expect("fixture migration is valid");
    }
}

impl Default for CompanyHarness {
    fn default() -> Self {
        Self::new()
    }
}
