use crate::secondary_validation::{check_digit_block, Validator};
use crate::str_utils::longest_run;
use crate::verdict::InvalidReason;

/// Iranian postal codes carry no check digit, only positional digit classes.
pub struct IranPostalCodeChecker;

const POSTAL_CODE_LENGTH: usize = 10;
const MAX_DIGIT_RUN: usize = 3;

// 0 and 2 are never used in the first four digits
const LEADING_DIGITS: &[u8] = b"13456789";
// the fifth digit additionally excludes 5
const FIFTH_DIGITS: &[u8] = b"1346789";
const LEADING_DIGIT_COUNT: usize = 4;

impl Validator for IranPostalCodeChecker {
    fn check(&self, candidate: &str) -> Result<(), InvalidReason> {
        check_digit_block(candidate, POSTAL_CODE_LENGTH)?;

        if longest_run(candidate) > MAX_DIGIT_RUN {
            return Err(InvalidReason::RepeatedDigits);
        }

        let bytes = candidate.as_bytes();
        if !bytes[..LEADING_DIGIT_COUNT]
            .iter()
            .all(|b| LEADING_DIGITS.contains(b))
        {
            return Err(InvalidReason::DisallowedDigit);
        }
        if !FIFTH_DIGITS.contains(&bytes[LEADING_DIGIT_COUNT]) {
            return Err(InvalidReason::DisallowedDigit);
        }
        Ok(())
    }
}
