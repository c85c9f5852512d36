use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::validator::error::ValidationError;

/// The closed set of Iranian identifiers that can be validated.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum IdentifierKind {
    /// Ten digit national code (kod-e melli), mod 11 check digit
    NationalId,
    /// Ten digit postal code, positional digit classes only
    PostCode,
    /// Mobile number starting with `09`
    Mobile,
    /// Sixteen digit bank card number, Luhn check
    CardNumber,
    /// `IR` prefixed account number, mod 97 check
    Sheba,
}

impl IdentifierKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parses an external type name. This is the only place where an unknown
    /// kind can show up, and it is reported as misuse rather than bad data.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        IdentifierKind::from_str(name).map_err(|_| ValidationError::UnknownKind(name.to_string()))
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw value as it arrives from a caller: text, a number, or any other JSON
/// value, which is coerced to text and then simply fails validation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum IdentifierValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Other(serde_json::Value),
}

impl IdentifierValue {
    /// Coerces the value to its string form, without trimming.
    pub fn to_text(&self) -> String {
        match self {
            IdentifierValue::Text(text) => text.clone(),
            IdentifierValue::Integer(value) => value.to_string(),
            IdentifierValue::Unsigned(value) => value.to_string(),
            IdentifierValue::Float(value) => value.to_string(),
            IdentifierValue::Other(value) => json_to_text(value),
        }
    }
}

// booleans print as words, arrays join their items with `,` (a null item is
// empty) and objects print as `[object Object]`
fn json_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(value) => value.to_string(),
        serde_json::Value::Number(value) => value.to_string(),
        serde_json::Value::String(value) => value.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::Null => String::new(),
                item => json_to_text(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        serde_json::Value::Object(_) => "[object Object]".to_string(),
    }
}

impl From<&str> for IdentifierValue {
    fn from(value: &str) -> Self {
        IdentifierValue::Text(value.to_string())
    }
}

impl From<String> for IdentifierValue {
    fn from(value: String) -> Self {
        IdentifierValue::Text(value)
    }
}

impl From<i64> for IdentifierValue {
    fn from(value: i64) -> Self {
        IdentifierValue::Integer(value)
    }
}

impl From<u64> for IdentifierValue {
    fn from(value: u64) -> Self {
        IdentifierValue::Unsigned(value)
    }
}

impl From<f64> for IdentifierValue {
    fn from(value: f64) -> Self {
        IdentifierValue::Float(value)
    }
}

/// A `{ "type": ..., "value": ... }` request coming from outside the crate.
///
/// `type` is kept as a raw string so an unknown kind can be named in the error.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidationRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: Option<IdentifierValue>,
}

impl ValidationRequest {
    pub fn new(kind: impl Into<String>, value: impl Into<IdentifierValue>) -> Self {
        Self {
            kind: kind.into(),
            value: Some(value.into()),
        }
    }

    pub fn without_value(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
        }
    }

    pub fn from_json(input: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(input).map_err(|err| ValidationError::InvalidRequest(err.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};
    use strum::IntoEnumIterator;

    #[test]
    fn kind_names_are_camel_case() {
        let names: Vec<&str> = IdentifierKind::iter().map(|kind| kind.as_str()).collect();
        assert_eq!(
            names,
            vec!["nationalId", "postCode", "mobile", "cardNumber", "sheba"]
        );
    }

    #[test]
    fn kind_serde_tokens() {
        assert_tokens(
            &IdentifierKind::CardNumber,
            &[Token::UnitVariant {
                name: "IdentifierKind",
                variant: "cardNumber",
            }],
        );
    }

    #[test]
    fn parse_kind_from_name() {
        for kind in IdentifierKind::iter() {
            assert_eq!(IdentifierKind::from_name(kind.as_str()), Ok(kind));
        }
        assert_eq!(
            IdentifierKind::from_name("unknown"),
            Err(ValidationError::UnknownKind("unknown".to_string()))
        );
        // names are case sensitive
        assert!(IdentifierKind::from_name("NationalId").is_err());
    }

    #[test]
    fn numbers_are_coerced_to_decimal_text() {
        assert_eq!(IdentifierValue::from(499370899i64).to_text(), "499370899");
        assert_eq!(IdentifierValue::from(u64::MAX).to_text(), "18446744073709551615");
        assert_eq!(IdentifierValue::from(1234567891.0).to_text(), "1234567891");
        assert_eq!(IdentifierValue::from(1.5).to_text(), "1.5");
    }

    #[test]
    fn request_from_json() {
        let request =
            ValidationRequest::from_json(r#"{"type": "nationalId", "value": 499370899}"#).unwrap();
        assert_eq!(request, ValidationRequest::new("nationalId", 499370899i64));

        let request = ValidationRequest::from_json(r#"{"type": "sheba", "value": null}"#).unwrap();
        assert_eq!(request, ValidationRequest::without_value("sheba"));

        let request = ValidationRequest::from_json(r#"{"type": "sheba"}"#).unwrap();
        assert_eq!(request.value, None);

        let request =
            ValidationRequest::from_json(r#"{"type": "mobile", "value": "+989123456789"}"#)
                .unwrap();
        assert_eq!(
            request.value,
            Some(IdentifierValue::Text("+989123456789".to_string()))
        );
    }

    #[test]
    fn malformed_request_is_rejected() {
        assert!(matches!(
            ValidationRequest::from_json(r#"{"value": "123"}"#),
            Err(ValidationError::InvalidRequest(_))
        ));
        assert!(matches!(
            ValidationRequest::from_json(r#"{"type": 5, "value": "123"}"#),
            Err(ValidationError::InvalidRequest(_))
        ));
        assert!(matches!(
            ValidationRequest::from_json("not json"),
            Err(ValidationError::InvalidRequest(_))
        ));
    }

    #[test]
    fn other_json_values_are_coerced_to_text() {
        let test_cases = vec![
            (r#"true"#, "true"),
            (r#"{"a": 1}"#, "[object Object]"),
            (r#"["0499370899"]"#, "0499370899"),
            (r#"[1, null, "x", [2, 3]]"#, "1,,x,2,3"),
            (r#"[]"#, ""),
        ];
        for (json, expected) in test_cases {
            let request =
                ValidationRequest::from_json(&format!(r#"{{"type": "mobile", "value": {json}}}"#))
                    .unwrap();
            assert_eq!(request.value.unwrap().to_text(), expected, "{json}");
        }
    }
}
