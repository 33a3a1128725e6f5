//! Pre-built test fixtures
//!
//! Deterministic, format-valid test data. The birth numbers satisfy the
//! month, date, and mod-11 checksum rules; the registration numbers are
//! 6 or 8 digits; the plates are 7 characters of `[A-Z0-9]`.

use chrono::{DateTime, TimeZone, Utc};

use core_kernel::{plus_months, Amount};
use domain_contracts::Vehicle;

/// Fixture for national identifiers
pub struct IdentityFixtures;

impl IdentityFixtures {
    /// A valid birth number (natural person, born 1990-05-12)
    pub fn natural_id() -> &'static str {
        "9005121235"
    }

    /// A second distinct birth number (female month encoding)
    pub fn second_natural_id() -> &'static str {
        "9055124001"
    }

    /// A third distinct birth number (born 2000-01-01)
    pub fn third_natural_id() -> &'static str {
        "0001012000"
    }

    /// A nine-digit birth number (born 1953-01-01)
    pub fn legacy_natural_id() -> &'static str {
        "530101123"
    }

    /// A valid eight-digit registration number (legal entity)
    pub fn legal_id() -> &'static str {
        "12345678"
    }

    /// A second distinct registration number, six digits
    pub fn second_legal_id() -> &'static str {
        "123456"
    }
}

/// Fixture for insurable vehicles
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// A standard vehicle worth 10 000
    pub fn standard() -> Vehicle {
        Vehicle::new("AA111BB", Amount::new(10_000)).expect("fixture plate is valid")
    }

    /// A distinct second vehicle worth 10 000
    pub fn second() -> Vehicle {
        Vehicle::new("BB222CC", Amount::new(10_000)).expect("fixture plate is valid")
    }

    /// A vehicle with an odd original value, for coverage truncation
    pub fn odd_valued() -> Vehicle {
        Vehicle::new("CC333DD", Amount::new(10_001)).expect("fixture plate is valid")
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Reference issuance instant (2025-01-01 00:00:00 UTC)
    pub fn issuance_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    /// `months` whole months after the issuance instant
    pub fn months_after_issuance(months: u32) -> DateTime<Utc> {
        plus_months(Self::issuance_time(), months).expect("fixture time in range")
    }
}
