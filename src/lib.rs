// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod identifier;
mod normalization;
mod observability;
mod patterns;
mod secondary_validation;
mod stats;
mod str_utils;
mod validation;
mod validator;
mod verdict;

// This is the public API of the library
pub use identifier::{IdentifierKind, IdentifierValue, ValidationRequest};
pub use normalization::normalize;
pub use observability::labels::Labels;
pub use patterns::{
    CompiledPattern, CompiledPatternBuilder, FaNumberKind, FaNumberPattern, FaWordKind,
    FaWordPattern, LengthBound, LengthUnit, PasswordKind, PasswordPattern, PatternError,
    PatternFamily, PatternRequest, UsernameKind, UsernamePattern,
};
pub use secondary_validation::{
    mod97_reduce, IranCardNumberChecksum, IranMobileChecker, IranNationalIdChecksum,
    IranPostalCodeChecker, ShebaChecksum, Validator,
};
pub use validation::{validate_regex, RegexValidationError};
pub use validator::{
    config::ValidatorConfig, error::ValidationError, validate, validate_request,
    IdentifierValidator, ValidatorBuilder,
};
pub use verdict::{InvalidReason, Verdict};

#[cfg(feature = "bench")]
pub use crate::{normalization::normalize_for_kind, str_utils::fold_native_digits};
