//! Identifier classification rules
//!
//! A party identifier is classified by its format:
//!
//! - **Birth number** (natural person): 9 or 10 digits encoding a birth
//!   date as `RRMMDD` plus a serial. Months 51-62 encode female births
//!   (month minus 50). Nine-digit numbers are only issued for years up
//!   to 1953; ten-digit numbers must satisfy the alternating-sign
//!   mod-11 checksum. The encoded date must be a real calendar date and
//!   must not lie in the future.
//! - **Registration number** (legal entity): exactly 6 or 8 digits.

use chrono::{NaiveDate, Utc};

use crate::error::PartyError;
use crate::party::LegalForm;

/// Classifies an identifier as natural or legal, rejecting anything else
pub fn classify_identifier(id: &str) -> Result<LegalForm, PartyError> {
    if id.is_empty() {
        return Err(PartyError::EmptyIdentifier);
    }
    if is_valid_birth_number(id) {
        Ok(LegalForm::Natural)
    } else if is_valid_registration_number(id) {
        Ok(LegalForm::Legal)
    } else {
        Err(PartyError::InvalidIdentifier(id.to_string()))
    }
}

/// Validates a natural-person birth number
pub fn is_valid_birth_number(birth_number: &str) -> bool {
    if birth_number.len() != 9 && birth_number.len() != 10 {
        return false;
    }
    if !birth_number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<i32> = birth_number
        .bytes()
        .map(|b| i32::from(b - b'0'))
        .collect();

    let rr = digits[0] * 10 + digits[1];
    let mm = digits[2] * 10 + digits[3];
    let dd = digits[4] * 10 + digits[5];

    // Months 51-62 encode female births
    let month = if mm > 50 && mm <= 62 {
        mm - 50
    } else if (1..=12).contains(&mm) {
        mm
    } else {
        return false;
    };

    let year = if birth_number.len() == 9 {
        // Nine-digit numbers were only issued up to 1953
        if rr > 53 {
            return false;
        }
        1900 + rr
    } else {
        let sum: i32 = digits
            .iter()
            .enumerate()
            .map(|(i, d)| if i % 2 == 0 { *d } else { -d })
            .sum();
        if sum % 11 != 0 {
            return false;
        }
        if rr < 54 {
            2000 + rr
        } else {
            1900 + rr
        }
    };

    match NaiveDate::from_ymd_opt(year, month as u32, dd as u32) {
        Some(date) => date <= Utc::now().date_naive(),
        None => false,
    }
}

/// Validates a legal-entity registration number
pub fn is_valid_registration_number(registration_number: &str) -> bool {
    (registration_number.len() == 6 || registration_number.len() == 8)
        && registration_number.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digit_birth_number_with_checksum() {
        // 1990-05-12, serial 1235: 9-0+0-5+1-2+1-2+3-5 = 0
        assert!(is_valid_birth_number("9005121235"));
    }

    #[test]
    fn test_female_month_offset() {
        // month 55 encodes May
        assert!(is_valid_birth_number("9055124001"));
    }

    #[test]
    fn test_bad_checksum_rejected() {
        assert!(!is_valid_birth_number("9005121234"));
    }

    #[test]
    fn test_nine_digit_birth_number() {
        assert!(is_valid_birth_number("530101123"));
        // nine-digit numbers end in 1953
        assert!(!is_valid_birth_number("540101123"));
    }

    #[test]
    fn test_invalid_month_and_day() {
        assert!(!is_valid_birth_number("9013121235"));
        assert!(!is_valid_birth_number("9002301235"));
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(!is_valid_birth_number("90051A1235"));
        assert!(!is_valid_registration_number("12345S"));
    }

    #[test]
    fn test_registration_number_lengths() {
        assert!(is_valid_registration_number("123456"));
        assert!(is_valid_registration_number("12345678"));
        assert!(!is_valid_registration_number("1234567"));
        assert!(!is_valid_registration_number("123456789"));
    }

    #[test]
    fn test_classification() {
        assert_eq!(classify_identifier("9005121235"), Ok(LegalForm::Natural));
        assert_eq!(classify_identifier("123456"), Ok(LegalForm::Legal));
        assert_eq!(classify_identifier(""), Err(PartyError::EmptyIdentifier));
        assert!(matches!(
            classify_identifier("not-an-id"),
            Err(PartyError::InvalidIdentifier(_))
        ));
    }
}
