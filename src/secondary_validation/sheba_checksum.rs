use crate::secondary_validation::Validator;
use crate::str_utils::is_ascii_digits;
use crate::verdict::InvalidReason;

/// Iranian IBAN ("sheba"): `IR` followed by the check digits and the account
/// digits, validated with the ISO 7064 mod 97-10 scheme.
pub struct ShebaChecksum;

const SHEBA_COUNTRY_CODE: &str = "IR";
const SHEBA_DIGIT_COUNT: usize = 22;
// country code plus the two check digits
const REARRANGED_PREFIX_LENGTH: usize = 4;
// 9 digits and a 2 digit remainder always fit a u64
const MAX_CHUNK_LENGTH: usize = 9;

impl Validator for ShebaChecksum {
    fn check(&self, candidate: &str) -> Result<(), InvalidReason> {
        let digits = candidate
            .strip_prefix(SHEBA_COUNTRY_CODE)
            .ok_or(InvalidReason::WrongPrefix)?;
        if !is_ascii_digits(digits) {
            return Err(InvalidReason::InvalidCharacters);
        }
        if digits.len() != SHEBA_DIGIT_COUNT {
            return Err(InvalidReason::WrongLength);
        }

        let rearranged = format!(
            "{}{}",
            &candidate[REARRANGED_PREFIX_LENGTH..],
            &candidate[..REARRANGED_PREFIX_LENGTH]
        );
        let numeral = expand_letters(&rearranged);

        match mod97_reduce(&numeral) {
            Some(1) => Ok(()),
            _ => Err(InvalidReason::ChecksumMismatch),
        }
    }
}

/// Replaces every letter by its two digit value, `A` = 10 up to `Z` = 35
fn expand_letters(input: &str) -> String {
    let mut numeral = String::with_capacity(input.len() + 2);
    for c in input.chars() {
        if c.is_ascii_uppercase() {
            numeral.push_str(&(c as u32 - 'A' as u32 + 10).to_string());
        } else {
            numeral.push(c);
        }
    }
    numeral
}

/// Computes `numeral mod 97` for a decimal string of any length.
///
/// The numeral is consumed from the left, at most 9 digits at a time, and the
/// remainder of each chunk is written back in front of the rest of the string.
/// Returns `None` when the input is empty or not made of ASCII digits.
pub fn mod97_reduce(numeral: &str) -> Option<u32> {
    if !is_ascii_digits(numeral) {
        return None;
    }

    let mut remainder = numeral.to_string();
    while remainder.len() > 2 {
        let chunk_length = remainder.len().min(MAX_CHUNK_LENGTH);
        let chunk: u64 = remainder[..chunk_length].parse().ok()?;
        remainder = format!("{}{}", chunk % 97, &remainder[chunk_length..]);
    }

    let last: u32 = remainder.parse().ok()?;
    Some(last % 97)
}
