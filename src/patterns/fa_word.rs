use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::patterns::{
    compile_custom, require_leading_char, CompiledPattern, LengthBound, LengthUnit,
    PatternError, PatternFamily, PERSIAN_BLOCK, PERSIAN_DIGITS, PUNCTUATION,
};

// Arabic script letters up to Farsi yeh, without the Persian digits
const PERSIAN_LETTERS: &str = r"\u{0600}-\u{06CC}";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FaWordKind {
    /// Persian letters and spaces, never at either end
    #[default]
    Basic,
    /// Persian letters and digits, spaces only between them
    Strict,
    /// Persian text with digits and punctuation
    Extended,
    Custom,
}

impl FaWordKind {
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        FaWordKind::from_str(name).map_err(|_| PatternError::UnknownType {
            family: PatternFamily::Word,
            name: name.to_string(),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FaWordPattern {
    #[serde(rename = "type")]
    pub kind: FaWordKind,
    pub min: usize,
    pub max: usize,
    pub custom_pattern: Option<String>,
}

impl Default for FaWordPattern {
    fn default() -> Self {
        Self {
            kind: FaWordKind::Basic,
            min: 1,
            max: 999_999,
            custom_pattern: None,
        }
    }
}

impl FaWordPattern {
    pub fn new(kind: FaWordKind) -> Self {
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

    pub fn custom_pattern(&self, custom_pattern: impl Into<String>) -> Self {
        let custom_pattern = custom_pattern.into();
        self.mutate_clone(|x| x.custom_pattern = Some(custom_pattern))
    }

    pub fn compile(&self) -> Result<CompiledPattern, PatternError> {
        match self.kind {
            FaWordKind::Basic => CompiledPattern::builder(format!("^[{PERSIAN_LETTERS} ]*$"))
                .forbid("^ ")
                .forbid(" $")
                .length(LengthBound::utf16(self.min, self.max)?)
                .build(),
            FaWordKind::Strict => {
                require_leading_char(self.min, self.max)?;
                // a run of spaces must be followed by a letter, so it can't end the text
                CompiledPattern::builder(format!(
                    "^[{PERSIAN_BLOCK}](?:[{PERSIAN_BLOCK}]| +)*$"
                ))
                .forbid(" $")
                .length(LengthBound::new(
                    self.min,
                    self.max,
                    LengthUnit::CollapsedSpaces,
                )?)
                .build()
            }
            FaWordKind::Extended => {
                let last = format!("{PERSIAN_BLOCK}0-9{PERSIAN_DIGITS}{PUNCTUATION}");
                CompiledPattern::builder(format!(
                    r"^[{PERSIAN_BLOCK}](?:[{last}\s]*[{last}])?$"
                ))
                .build()
            }
            FaWordKind::Custom => {
                compile_custom(PatternFamily::Word, self.custom_pattern.as_deref())
            }
        }
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
