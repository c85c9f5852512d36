use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::patterns::{
    compile_custom, require_leading_char, CompiledPattern, LengthBound, PatternError,
    PatternFamily,
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum UsernameKind {
    /// ASCII letters
    Basic,
    /// ASCII letters and digits
    #[default]
    Alpha,
    /// Letters, digits, `.` and `_`, no separator at either end or twice in a row
    Strict,
    /// A lowercase letter followed by lowercase letters, digits and `_`
    Extended,
    Custom,
}

impl UsernameKind {
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        UsernameKind::from_str(name).map_err(|_| PatternError::UnknownType {
            family: PatternFamily::Username,
            name: name.to_string(),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UsernamePattern {
    #[serde(rename = "type")]
    pub kind: UsernameKind,
    pub min: usize,
    pub max: usize,
    pub custom_pattern: Option<String>,
}

impl Default for UsernamePattern {
    fn default() -> Self {
        Self {
            kind: UsernameKind::Alpha,
            min: 3,
            max: 30,
            custom_pattern: None,
        }
    }
}

impl UsernamePattern {
    pub fn new(kind: UsernameKind) -> Self {
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
        let builder = match self.kind {
            UsernameKind::Basic => CompiledPattern::builder("^[a-zA-Z]*$"),
            UsernameKind::Alpha => CompiledPattern::builder("^[a-zA-Z0-9]*$"),
            UsernameKind::Strict => CompiledPattern::builder("^[a-zA-Z0-9._]*$")
                .forbid("^[_.]")
                .forbid("[_.]{2}")
                .forbid("[_.]$"),
            UsernameKind::Extended => {
                require_leading_char(self.min, self.max)?;
                CompiledPattern::builder("^[a-z][a-z0-9_]*$")
            }
            UsernameKind::Custom => {
                return compile_custom(PatternFamily::Username, self.custom_pattern.as_deref())
            }
        };
        builder
            .length(LengthBound::utf16(self.min, self.max)?)
            .build()
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
