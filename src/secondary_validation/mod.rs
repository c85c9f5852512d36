mod iran_card_number_checksum;
mod iran_mobile_checker;
mod iran_national_id_checksum;
mod iran_postal_code_checker;
mod sheba_checksum;

pub use crate::secondary_validation::iran_card_number_checksum::IranCardNumberChecksum;
pub use crate::secondary_validation::iran_mobile_checker::IranMobileChecker;
pub use crate::secondary_validation::iran_national_id_checksum::IranNationalIdChecksum;
pub use crate::secondary_validation::iran_postal_code_checker::IranPostalCodeChecker;
pub use crate::secondary_validation::sheba_checksum::{mod97_reduce, ShebaChecksum};

use crate::identifier::IdentifierKind;
use crate::str_utils::{is_ascii_digits, is_single_repeated_char};
use crate::verdict::InvalidReason;

/// An engine deciding whether an already normalized identifier is valid.
///
/// Implementations must accept any string without panicking.
pub trait Validator: Send + Sync {
    fn check(&self, candidate: &str) -> Result<(), InvalidReason>;

    fn is_valid_match(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok()
    }
}

impl Validator for IdentifierKind {
    fn check(&self, candidate: &str) -> Result<(), InvalidReason> {
        match self {
            IdentifierKind::NationalId => IranNationalIdChecksum.check(candidate),
            IdentifierKind::PostCode => IranPostalCodeChecker.check(candidate),
            IdentifierKind::Mobile => IranMobileChecker.check(candidate),
            IdentifierKind::CardNumber => IranCardNumberChecksum.check(candidate),
            IdentifierKind::Sheba => ShebaChecksum.check(candidate),
        }
    }
}

/// Requires exactly `length` ASCII digits that are not all the same digit.
fn check_digit_block(candidate: &str, length: usize) -> Result<(), InvalidReason> {
    if !is_ascii_digits(candidate) {
        return Err(InvalidReason::InvalidCharacters);
    }
    if candidate.len() != length {
        return Err(InvalidReason::WrongLength);
    }
    if is_single_repeated_char(candidate) {
        return Err(InvalidReason::RepeatedDigits);
    }
    Ok(())
}

/// Digit values of an ASCII digit string
fn digit_values(candidate: &str) -> impl Iterator<Item = u32> + '_ {
    candidate.bytes().map(|b| u32::from(b - b'0'))
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    #[test]
    fn kind_dispatches_to_its_engine() {
        let test_cases = vec![
            (IdentifierKind::NationalId, "0499370899"),
            (IdentifierKind::PostCode, "1345678901"),
            (IdentifierKind::Mobile, "09123456789"),
            (IdentifierKind::CardNumber, "6037997599999993"),
            (IdentifierKind::Sheba, "IR5801200000000041234567"),
        ];
        for (kind, valid) in &test_cases {
            assert!(kind.is_valid_match(valid), "{kind}: {valid}");
            // a value of one kind is never valid for any other kind
            for (other, _) in &test_cases {
                if other != kind {
                    assert!(!other.is_valid_match(valid), "{other}: {valid}");
                }
            }
        }
    }

    #[test]
    fn engines_are_total() {
        let inputs = vec![
            "",
            " ",
            "-",
            "IR",
            "۰۹۱۲۳۴۵۶۷۸۹",
            "0912345678\u{0}",
            "🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅",
            "IR🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅🎅",
            "99999999999999999999999999999999999999999999",
        ];
        for kind in [
            IdentifierKind::NationalId,
            IdentifierKind::PostCode,
            IdentifierKind::Mobile,
            IdentifierKind::CardNumber,
            IdentifierKind::Sheba,
        ] {
            for input in &inputs {
                assert!(!kind.is_valid_match(input), "{kind}: {input}");
            }
        }
    }

    #[test]
    fn digit_block_reasons() {
        assert_eq!(check_digit_block("12a4", 4), Err(InvalidReason::InvalidCharacters));
        assert_eq!(check_digit_block("", 4), Err(InvalidReason::InvalidCharacters));
        assert_eq!(check_digit_block("123", 4), Err(InvalidReason::WrongLength));
        assert_eq!(check_digit_block("4444", 4), Err(InvalidReason::RepeatedDigits));
        assert_eq!(check_digit_block("1234", 4), Ok(()));
    }
}
