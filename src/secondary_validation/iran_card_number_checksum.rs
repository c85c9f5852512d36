use crate::secondary_validation::{check_digit_block, digit_values, Validator};
use crate::verdict::InvalidReason;

/// Luhn checksum over a 16 digit card number, doubling the digits at even
/// indexes counted from the left (the same positions as the classic
/// right-to-left Luhn for an even length).
pub struct IranCardNumberChecksum;

const CARD_NUMBER_LENGTH: usize = 16;

impl Validator for IranCardNumberChecksum {
    fn check(&self, candidate: &str) -> Result<(), InvalidReason> {
        check_digit_block(candidate, CARD_NUMBER_LENGTH)?;

        let sum: u32 = digit_values(candidate)
            .enumerate()
            .map(|(index, digit)| {
                if index % 2 == 1 {
                    digit
                } else if digit > 4 {
                    digit * 2 - 9
                } else {
                    digit * 2
                }
            })
            .sum();

        if sum % 10 != 0 {
            return Err(InvalidReason::ChecksumMismatch);
        }
        Ok(())
    }
}
