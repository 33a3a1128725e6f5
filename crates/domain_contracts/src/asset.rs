//! Insurable assets
//!
//! A vehicle is immutable after creation; its original value drives the
//! coverage derivation and the minimum-premium rule at issuance.

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, CoreError, PlateNumber};

/// A vehicle identified by its license plate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    license_plate: PlateNumber,
    original_value: Amount,
}

impl Vehicle {
    /// Creates a vehicle
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the plate is not exactly seven
    /// characters of `[A-Z0-9]`, or if the original value is not
    /// strictly positive.
    pub fn new(license_plate: impl Into<String>, original_value: Amount) -> Result<Self, CoreError> {
        let plate = license_plate.into();
        if plate.len() != 7 || !plate.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(CoreError::invalid_argument(format!(
                "license plate '{plate}' must be 7 characters of A-Z or 0-9"
            )));
        }
        if !original_value.is_positive() {
            return Err(CoreError::invalid_argument(
                "vehicle original value must be positive",
            ));
        }

        Ok(Self {
            license_plate: PlateNumber::new(plate),
            original_value,
        })
    }

    pub fn license_plate(&self) -> &PlateNumber {
        &self.license_plate
    }

    pub fn original_value(&self) -> Amount {
        self.original_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_plate() {
        let vehicle = Vehicle::new("AA111BB", Amount::new(10_000)).unwrap();
        assert_eq!(vehicle.license_plate().as_str(), "AA111BB");
        assert_eq!(vehicle.original_value(), Amount::new(10_000));
    }

    #[test]
    fn test_plate_length_enforced() {
        assert!(Vehicle::new("AA111B", Amount::new(100)).is_err());
        assert!(Vehicle::new("AA111BBB", Amount::new(100)).is_err());
    }

    #[test]
    fn test_plate_characters_enforced() {
        assert!(Vehicle::new("aa111bb", Amount::new(100)).is_err());
        assert!(Vehicle::new("AA-11BB", Amount::new(100)).is_err());
    }

    #[test]
    fn test_original_value_must_be_positive() {
        assert!(Vehicle::new("AA111BB", Amount::ZERO).is_err());
        assert!(Vehicle::new("AA111BB", Amount::new(-5)).is_err());
    }
}
