//! Regex generators for Persian text, Persian numbers, passwords and usernames.
//!
//! These are independent of the identifier engines. Callers may use them as a
//! cheap pre-filter before validation.
//!
//! The `regex` crate supports neither look-around nor large counted
//! repetitions, so a [CompiledPattern] is split into a base regex, regexes that
//! must match, regexes that must not match and an explicit length bound.

mod fa_number;
mod fa_word;
mod password;
mod username;

pub use fa_number::{FaNumberKind, FaNumberPattern};
pub use fa_word::{FaWordKind, FaWordPattern};
pub use password::{PasswordKind, PasswordPattern};
pub use username::{UsernameKind, UsernamePattern};

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::stats::GLOBAL_STATS;
use crate::validation::{validate_and_create_regex, RegexValidationError};

pub(crate) const PERSIAN_BLOCK: &str = r"\u{0600}-\u{06FF}";
pub(crate) const PERSIAN_DIGITS: &str = r"\u{06F0}-\u{06F9}";
pub(crate) const PUNCTUATION: &str = r#".,!؟\-_:;@#$%^&*()+=\[\]{}"'/\\|<>~"#;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PatternFamily {
    Word,
    Number,
    Password,
    Username,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Invalid {family} regex type: {name}")]
    UnknownType { family: PatternFamily, name: String },

    #[error("Custom pattern must be provided for {family} type: \"custom\"")]
    MissingCustomPattern { family: PatternFamily },

    #[error("Invalid length bounds {min}..{max}")]
    InvalidLength { min: usize, max: usize },

    #[error("Invalid pattern request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    InvalidRegex(#[from] RegexValidationError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    /// UTF-16 code units
    Utf16,
    /// UTF-16 code units after every run of spaces is collapsed to one space
    CollapsedSpaces,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthBound {
    pub min: usize,
    pub max: usize,
    pub unit: LengthUnit,
}

impl LengthBound {
    pub fn new(min: usize, max: usize, unit: LengthUnit) -> Result<Self, PatternError> {
        if min > max {
            return Err(PatternError::InvalidLength { min, max });
        }
        Ok(Self { min, max, unit })
    }

    pub fn utf16(min: usize, max: usize) -> Result<Self, PatternError> {
        Self::new(min, max, LengthUnit::Utf16)
    }

    pub fn measure(&self, input: &str) -> usize {
        match self.unit {
            LengthUnit::Utf16 => input.encode_utf16().count(),
            LengthUnit::CollapsedSpaces => {
                let mut previous_space = false;
                let mut length = 0;
                for c in input.chars() {
                    let is_space = c == ' ';
                    if !(is_space && previous_space) {
                        length += c.len_utf16();
                    }
                    previous_space = is_space;
                }
                length
            }
        }
    }

    pub fn contains(&self, input: &str) -> bool {
        (self.min..=self.max).contains(&self.measure(input))
    }
}

/// A compiled matcher equivalent to one generated pattern.
#[derive(Clone, Debug)]
pub struct CompiledPattern {
    regex: Regex,
    required: Vec<Regex>,
    forbidden: Vec<Regex>,
    length: Option<LengthBound>,
}

impl CompiledPattern {
    pub fn builder(pattern: impl Into<String>) -> CompiledPatternBuilder {
        CompiledPatternBuilder {
            pattern: pattern.into(),
            required: vec![],
            forbidden: vec![],
            length: None,
        }
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.length.map_or(true, |bound| bound.contains(input))
            && self.regex.is_match(input)
            && self.required.iter().all(|regex| regex.is_match(input))
            && !self.forbidden.iter().any(|regex| regex.is_match(input))
    }

    /// The base regex, without the extra constraints
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn length(&self) -> Option<LengthBound> {
        self.length
    }
}

pub struct CompiledPatternBuilder {
    pattern: String,
    required: Vec<String>,
    forbidden: Vec<String>,
    length: Option<LengthBound>,
}

impl CompiledPatternBuilder {
    pub fn require(mut self, pattern: impl Into<String>) -> Self {
        self.required.push(pattern.into());
        self
    }

    pub fn forbid(mut self, pattern: impl Into<String>) -> Self {
        self.forbidden.push(pattern.into());
        self
    }

    pub fn length(mut self, bound: LengthBound) -> Self {
        self.length = Some(bound);
        self
    }

    pub fn build(self) -> Result<CompiledPattern, PatternError> {
        let compiled = self.compile();
        match &compiled {
            Ok(_) => GLOBAL_STATS.pattern_compilations.increment(1),
            Err(_) => GLOBAL_STATS.pattern_compilation_errors.increment(1),
        }
        compiled
    }

    fn compile(self) -> Result<CompiledPattern, PatternError> {
        let compile_all = |patterns: &[String]| -> Result<Vec<Regex>, RegexValidationError> {
            patterns
                .iter()
                .map(|pattern| validate_and_create_regex(pattern))
                .collect()
        };
        Ok(CompiledPattern {
            regex: validate_and_create_regex(&self.pattern)?,
            required: compile_all(&self.required)?,
            forbidden: compile_all(&self.forbidden)?,
            length: self.length,
        })
    }
}

/// Compiles a user supplied pattern verbatim
pub(crate) fn compile_custom(
    family: PatternFamily,
    custom_pattern: Option<&str>,
) -> Result<CompiledPattern, PatternError> {
    match custom_pattern {
        Some(pattern) if !pattern.is_empty() => CompiledPattern::builder(pattern).build(),
        _ => Err(PatternError::MissingCustomPattern { family }),
    }
}

/// Patterns that start with one fixed character need room for it
pub(crate) fn require_leading_char(min: usize, max: usize) -> Result<(), PatternError> {
    if min == 0 {
        return Err(PatternError::InvalidLength { min, max });
    }
    Ok(())
}

/// A `{ family, type, min, max, ... }` request for one of the generators
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "family", rename_all = "camelCase")]
pub enum PatternRequest {
    Word(FaWordPattern),
    Number(FaNumberPattern),
    Password(PasswordPattern),
    Username(UsernamePattern),
}

impl PatternRequest {
    pub fn from_json(input: &str) -> Result<Self, PatternError> {
        serde_json::from_str(input).map_err(|err| PatternError::InvalidRequest(err.to_string()))
    }

    pub fn family(&self) -> PatternFamily {
        match self {
            PatternRequest::Word(_) => PatternFamily::Word,
            PatternRequest::Number(_) => PatternFamily::Number,
            PatternRequest::Password(_) => PatternFamily::Password,
            PatternRequest::Username(_) => PatternFamily::Username,
        }
    }

    pub fn compile(&self) -> Result<CompiledPattern, PatternError> {
        match self {
            PatternRequest::Word(config) => config.compile(),
            PatternRequest::Number(config) => config.compile(),
            PatternRequest::Password(config) => config.compile(),
            PatternRequest::Username(config) => config.compile(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn length_is_counted_in_utf16_units() {
        let bound = LengthBound::utf16(2, 3).unwrap();
        assert_eq!(bound.measure("ab"), 2);
        assert_eq!(bound.measure("سلام"), 4);
        // astral characters take two units
        assert_eq!(bound.measure("a🎅"), 3);
        assert!(bound.contains("a🎅"));
        assert!(!bound.contains("a"));
    }

    #[test]
    fn space_runs_count_once() {
        let bound = LengthBound::new(1, 10, LengthUnit::CollapsedSpaces).unwrap();
        assert_eq!(bound.measure("ab   cd"), 5);
        assert_eq!(bound.measure("a b"), 3);
        assert_eq!(bound.measure("   "), 1);
        assert_eq!(bound.measure(""), 0);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert_eq!(
            LengthBound::utf16(5, 3),
            Err(PatternError::InvalidLength { min: 5, max: 3 })
        );
    }

    #[test]
    fn compiled_pattern_applies_every_constraint() {
        let pattern = CompiledPattern::builder("^[a-z_]*$")
            .require("[0-9]|_")
            .forbid("^_")
            .length(LengthBound::utf16(2, 4).unwrap())
            .build()
            .unwrap();
        assert!(pattern.is_match("ab_"));
        assert!(!pattern.is_match("abc"));
        assert!(!pattern.is_match("_ab"));
        assert!(!pattern.is_match("abcd_"));
        assert_eq!(pattern.as_str(), "^[a-z_]*$");
    }

    #[test]
    fn invalid_constraint_fails_compilation() {
        assert_eq!(
            CompiledPattern::builder("^a$").forbid("(").build().err(),
            Some(PatternError::InvalidRegex(RegexValidationError::InvalidSyntax))
        );
    }

    #[test]
    fn custom_pattern_is_required() {
        assert_eq!(
            compile_custom(PatternFamily::Word, None).err(),
            Some(PatternError::MissingCustomPattern {
                family: PatternFamily::Word
            })
        );
        assert_eq!(
            compile_custom(PatternFamily::Password, Some("")).err(),
            Some(PatternError::MissingCustomPattern {
                family: PatternFamily::Password
            })
        );
        assert!(compile_custom(PatternFamily::Username, Some("^x+$"))
            .unwrap()
            .is_match("xxx"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PatternError::UnknownType {
                family: PatternFamily::Word,
                name: "fancy".to_string()
            }
            .to_string(),
            "Invalid word regex type: fancy"
        );
        assert_eq!(
            PatternError::MissingCustomPattern {
                family: PatternFamily::Username
            }
            .to_string(),
            "Custom pattern must be provided for username type: \"custom\""
        );
    }
}
