use crate::secondary_validation::Validator;
use crate::verdict::InvalidReason;
use once_cell::sync::Lazy;
use regex::Regex;

pub struct IranMobileChecker;

const MOBILE_PREFIX: &str = "09";
const MOBILE_LENGTH: usize = 11;

// `\d` is Unicode aware in Rust, only ASCII digits are accepted here
static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^09[0-9]{9}$").expect("mobile regex is valid"));

impl Validator for IranMobileChecker {
    fn check(&self, candidate: &str) -> Result<(), InvalidReason> {
        if MOBILE_REGEX.is_match(candidate) {
            return Ok(());
        }
        if !candidate.starts_with(MOBILE_PREFIX) {
            return Err(InvalidReason::WrongPrefix);
        }
        if candidate.chars().count() != MOBILE_LENGTH {
            return Err(InvalidReason::WrongLength);
        }
        Err(InvalidReason::InvalidCharacters)
    }
}
