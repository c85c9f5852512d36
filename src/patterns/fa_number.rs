use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::patterns::{
    CompiledPattern, LengthBound, PatternError, PatternFamily, PERSIAN_DIGITS, PUNCTUATION,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FaNumberKind {
    /// Persian digits only
    #[default]
    Basic,
    /// Groups of Persian digits separated by spaces
    Strict,
    /// ASCII or Persian digits with punctuation in between
    Extended,
}

impl FaNumberKind {
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        FaNumberKind::from_str(name).map_err(|_| PatternError::UnknownType {
            family: PatternFamily::Number,
            name: name.to_string(),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FaNumberPattern {
    #[serde(rename = "type")]
    pub kind: FaNumberKind,
    pub min: usize,
    pub max: usize,
}

impl Default for FaNumberPattern {
    fn default() -> Self {
        Self {
            kind: FaNumberKind::Basic,
            min: 1,
            max: 999_999,
        }
    }
}

impl FaNumberPattern {
    pub fn new(kind: FaNumberKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn min(&self, min: usize) -> Self {
        self.mutate_clone(|x| x.min = min)
    }

    pub fn max(&self, max: usize) -> Self {
        self.mutate_clone(|x| x.max = max)
    }

    pub fn compile(&self) -> Result<CompiledPattern, PatternError> {
        match self.kind {
            FaNumberKind::Basic => CompiledPattern::builder(format!("^[{PERSIAN_DIGITS}]*$"))
                .length(LengthBound::utf16(self.min, self.max)?)
                .build(),
            FaNumberKind::Strict => CompiledPattern::builder(format!(
                "^[{PERSIAN_DIGITS}]+(?: +[{PERSIAN_DIGITS}]+)*$"
            ))
            .length(LengthBound::utf16(self.min, self.max)?)
            .build(),
            // the length bounds do not apply to free-form numbers
            FaNumberKind::Extended => {
                let digits = format!("0-9{PERSIAN_DIGITS}");
                CompiledPattern::builder(format!(
                    r"^[{digits}](?:[{digits} {PUNCTUATION}\s]*[{digits}])?$"
                ))
                .build()
            }
        }
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use crate::patterns::*;

    fn compile(kind: FaNumberKind, min: usize, max: usize) -> CompiledPattern {
        FaNumberPattern::new(kind).min(min).max(max).compile().unwrap()
    }

    #[test]
    fn basic_numbers() {
        let pattern = compile(FaNumberKind::Basic, 1, 10);
        for valid in ["۱۴۰۳", "۰", "۰۹۱۲۳۴۵۶۷۸"] {
            assert!(pattern.is_match(valid), "{valid}");
        }
        for invalid in ["", "1403", "۱۴ ۰۳", "١٤٠٣", "۰۹۱۲۳۴۵۶۷۸۹"] {
            assert!(!pattern.is_match(invalid), "{invalid}");
        }
    }

    #[test]
    fn basic_numbers_may_be_empty_with_zero_min() {
        assert!(compile(FaNumberKind::Basic, 0, 3).is_match(""));
    }

    #[test]
    fn strict_numbers() {
        let pattern = compile(FaNumberKind::Strict, 1, 5);
        for valid in ["۱۲ ۳۴", "۱۲۳۴۵", "۱ ۲ ۳", "۱  ۲"] {
            assert!(pattern.is_match(valid), "{valid}");
        }
        for invalid in ["", " ۱۲", "۱۲ ", "12", "۱۲  ۳۴", "۱۲۳۴۵۶"] {
            assert!(!pattern.is_match(invalid), "{invalid}");
        }
    }

    #[test]
    fn extended_numbers() {
        let pattern = compile(FaNumberKind::Extended, 1, 1);
        for valid in ["123", "۱۲۳", "1,234.56", "۱۲-۳۴", "021-1234 5678", "1۲3", "7"] {
            assert!(pattern.is_match(valid), "{valid}");
        }
        for invalid in ["", "abc", "12a", "-12", "12 ", "۱۲ سلام", "(021) 1234"] {
            assert!(!pattern.is_match(invalid), "{invalid}");
        }
    }

    #[test]
    fn inverted_bounds() {
        assert_eq!(
            FaNumberPattern::new(FaNumberKind::Strict)
                .min(10)
                .max(2)
                .compile()
                .err(),
            Some(PatternError::InvalidLength { min: 10, max: 2 })
        );
    }

    #[test]
    fn unknown_kind() {
        assert_eq!(FaNumberKind::from_name("extended"), Ok(FaNumberKind::Extended));
        assert_eq!(
            FaNumberKind::from_name("custom").unwrap_err().to_string(),
            "Invalid number regex type: custom"
        );
    }
}
