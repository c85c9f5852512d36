use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexValidationError {
    #[error("Invalid regex syntax")]
    InvalidSyntax,

    #[error("The regex has exceeded the complexity limit (i.e. it might be too slow)")]
    TooComplex,
}

const REGEX_COMPLEXITY_LIMIT: usize = 1_000_000;

/// Checks that a regex pattern can be used as a custom pattern
pub fn validate_regex(input: &str) -> Result<(), RegexValidationError> {
    // This is the same as `validate_and_create_regex`, but removes the actual Regex type
    // to create a more stable API for external users of the crate.
    validate_and_create_regex(input).map(|_| ())
}

pub fn validate_and_create_regex(input: &str) -> Result<Regex, RegexValidationError> {
    RegexBuilder::new(input)
        .size_limit(REGEX_COMPLEXITY_LIMIT)
        .dot_matches_new_line(false)
        .unicode(true)
        .build()
        .map_err(|regex_err| match regex_err {
            regex::Error::CompiledTooBig(_) => RegexValidationError::TooComplex,
            _ => RegexValidationError::InvalidSyntax,
        })
}
