use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::patterns::{compile_custom, CompiledPattern, LengthBound, PatternError, PatternFamily};

// Look-aheads of the form `(?=.*x)` only search the first line: `.` stops at
// any line terminator.
const FIRST_LINE: &str = r"^[^\n\r\u{2028}\u{2029}]*";
const DIGIT: &str = "[0-9]";
const LETTER: &str = "[a-zA-Z]";
const UPPERCASE: &str = "[A-Z]";
const LOWERCASE: &str = "[a-z]";
const SPECIAL: &str = r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PasswordKind {
    /// Any characters
    #[default]
    Weak,
    /// At least one digit and one letter
    Normal,
    /// A digit, an uppercase, a lowercase and a special character
    Strong,
    /// A digit, an uppercase and a special character
    VeryStrong,
    Custom,
}

impl PasswordKind {
    pub fn from_name(name: &str) -> Result<Self, PatternError> {
        PasswordKind::from_str(name).map_err(|_| PatternError::UnknownType {
            family: PatternFamily::Password,
            name: name.to_string(),
        })
    }

    fn required_classes(&self) -> &'static [&'static str] {
        match self {
            PasswordKind::Weak | PasswordKind::Custom => &[],
            PasswordKind::Normal => &[DIGIT, LETTER],
            PasswordKind::Strong => &[DIGIT, UPPERCASE, LOWERCASE, SPECIAL],
            PasswordKind::VeryStrong => &[DIGIT, UPPERCASE, SPECIAL],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PasswordPattern {
    #[serde(rename = "type")]
    pub kind: PasswordKind,
    pub min: usize,
    pub max: usize,
    #[serde(alias = "newPattern")]
    pub custom_pattern: Option<String>,
}

impl Default for PasswordPattern {
    fn default() -> Self {
        Self {
            kind: PasswordKind::Weak,
            min: 2,
            max: 256,
            custom_pattern: None,
        }
    }
}

impl PasswordPattern {
    pub fn new(kind: PasswordKind) -> Self {
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
        if self.kind == PasswordKind::Custom {
            return compile_custom(PatternFamily::Password, self.custom_pattern.as_deref());
        }

        let mut builder = CompiledPattern::builder(r"^[\s\S]*$")
            .length(LengthBound::utf16(self.min, self.max)?);
        for class in self.kind.required_classes() {
            builder = builder.require(format!("{FIRST_LINE}{class}"));
        }
        builder.build()
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
