use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

use crate::identifier::IdentifierKind;

/// Why an identifier was rejected. Bad data is never an error for the caller,
/// this only explains a negative result.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Error, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InvalidReason {
    #[error("No value was provided")]
    Missing,

    #[error("The value does not have the expected length")]
    WrongLength,

    #[error("The value contains characters outside of the expected alphabet")]
    InvalidCharacters,

    #[error("The value repeats the same digit")]
    RepeatedDigits,

    #[error("A digit is not allowed at its position")]
    DisallowedDigit,

    #[error("The value does not start with the expected prefix")]
    WrongPrefix,

    #[error("The check digits do not match")]
    ChecksumMismatch,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// The detailed result of validating one identifier.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub kind: IdentifierKind,
    pub reason: Option<InvalidReason>,
}

impl Verdict {
    pub fn valid(kind: IdentifierKind) -> Self {
        Self { kind, reason: None }
    }

    pub fn invalid(kind: IdentifierKind, reason: InvalidReason) -> Self {
        Self {
            kind,
            reason: Some(reason),
        }
    }

    pub fn from_check(kind: IdentifierKind, result: Result<(), InvalidReason>) -> Self {
        match result {
            Ok(()) => Self::valid(kind),
            Err(reason) => Self::invalid(kind, reason),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.reason.is_none()
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> bool {
        verdict.is_valid()
    }
}
