use crate::identifier::{IdentifierKind, IdentifierValue};
use crate::str_utils::{fold_native_digits, remove_separators, trim_whitespace};
use crate::validator::config::ValidatorConfig;


const COUNTRY_CODE_PREFIXES: &[&str] = &["+98", "0098"];

/// Turns a raw value into the canonical string an engine expects.
///
/// Returns `None` only for a missing value. Everything else produces a string,
/// even if the engine is going to reject it.
pub fn normalize(
    kind: IdentifierKind,
    value: Option<&IdentifierValue>,
    config: &ValidatorConfig,
) -> Option<String> {
    let text = value?.to_text();
    let trimmed = trim_whitespace(&text);
    let trimmed = if config.fold_native_digits {
        fold_native_digits(trimmed)
    } else {
        trimmed.to_string()
    };
    Some(normalize_for_kind(kind, &trimmed))
}

pub fn normalize_for_kind(kind: IdentifierKind, input: &str) -> String {
    match kind {
        IdentifierKind::NationalId => input.to_string(),
        // only a single hyphen is accepted between the two halves
        IdentifierKind::PostCode => input.replacen('-', "", 1),
        IdentifierKind::CardNumber => remove_separators(input),
        IdentifierKind::Mobile => replace_country_code(input),
        IdentifierKind::Sheba => remove_separators(&input.to_uppercase()),
    }
}

fn replace_country_code(input: &str) -> String {
    for prefix in COUNTRY_CODE_PREFIXES {
        if let Some(local) = input.strip_prefix(prefix) {
            return format!("0{local}");
        }
    }
    input.to_string()
}
