use crate::secondary_validation::{digit_values, Validator};
use crate::str_utils::{is_ascii_digits, is_single_repeated_char};
use crate::verdict::InvalidReason;

pub struct IranNationalIdChecksum;

const NATIONAL_ID_LENGTH: usize = 10;
const MIN_NATIONAL_ID_LENGTH: usize = 8;

impl Validator for IranNationalIdChecksum {
    fn check(&self, candidate: &str) -> Result<(), InvalidReason> {
        if !is_ascii_digits(candidate) {
            return Err(InvalidReason::InvalidCharacters);
        }
        if !(MIN_NATIONAL_ID_LENGTH..=NATIONAL_ID_LENGTH).contains(&candidate.len()) {
            return Err(InvalidReason::WrongLength);
        }

        // leading zeros are commonly dropped, e.g. when the code was stored as a number
        let padded = format!("{:0>width$}", candidate, width = NATIONAL_ID_LENGTH);
        if is_single_repeated_char(&padded) {
            return Err(InvalidReason::RepeatedDigits);
        }

        // weights 10 down to 2 over the first 9 digits
        let mut sum = 0;
        let mut digits = digit_values(&padded);
        for weight in (2..=10).rev() {
            sum += weight * digits.next().ok_or(InvalidReason::WrongLength)?;
        }
        let check_digit = digits.next().ok_or(InvalidReason::WrongLength)?;

        let remainder = sum % 11;
        let expected = if remainder < 2 {
            remainder
        } else {
            11 - remainder
        };

        if expected != check_digit {
            return Err(InvalidReason::ChecksumMismatch);
        }
        Ok(())
    }
}
