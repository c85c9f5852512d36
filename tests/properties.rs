use ir_ids::{
    mod97_reduce, normalize, validate, validate_request, IdentifierKind, IdentifierValue,
    ValidationError, ValidationRequest, ValidatorConfig,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn luhn_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(index, digit)| {
            let digit = *digit as u32;
            if index % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

fn card_number(payload: &[u8]) -> String {
    payload
        .iter()
        .chain(std::iter::once(&luhn_check_digit(payload)))
        .map(|digit| char::from(b'0' + digit))
        .collect()
}

fn sheba(account: &str) -> String {
    // I = 18, R = 27
    let remainder = mod97_reduce(&format!("{account}182700")).unwrap_or_default();
    format!("IR{:02}{account}", 98 - remainder)
}

fn replace_digit(input: &str, index: usize, offset: u8) -> String {
    let mut bytes = input.as_bytes().to_vec();
    let digit = bytes[index] - b'0';
    bytes[index] = b'0' + (digit + offset) % 10;
    String::from_utf8(bytes).unwrap()
}

proptest! {
    #[test]
    fn repeated_digits_are_never_valid(digit in 0u8..10) {
        let digit = char::from(b'0' + digit);
        let ten: String = std::iter::repeat(digit).take(10).collect();
        let sixteen: String = std::iter::repeat(digit).take(16).collect();
        prop_assert!(!validate(IdentifierKind::NationalId, ten.as_str()));
        prop_assert!(!validate(IdentifierKind::PostCode, ten.as_str()));
        prop_assert!(!validate(IdentifierKind::CardNumber, sixteen.as_str()));
    }

    #[test]
    fn card_numbers_detect_single_digit_errors(
        payload in proptest::collection::vec(0u8..10, 15),
        index in 0usize..16,
        offset in 1u8..10,
    ) {
        let card = card_number(&payload);
        prop_assume!(card.bytes().any(|b| b != card.as_bytes()[0]));
        prop_assert!(validate(IdentifierKind::CardNumber, card.as_str()), "{}", card);

        let altered = replace_digit(&card, index, offset);
        prop_assert!(!validate(IdentifierKind::CardNumber, altered.as_str()), "{}", altered);
    }

    #[test]
    fn sheba_detects_single_digit_errors(
        account in "[0-9]{20}",
        index in 2usize..24,
        offset in 1u8..10,
    ) {
        let sheba = sheba(&account);
        prop_assert!(validate(IdentifierKind::Sheba, sheba.as_str()), "{}", sheba);

        let altered = replace_digit(&sheba, index, offset);
        prop_assert!(!validate(IdentifierKind::Sheba, altered.as_str()), "{}", altered);
    }

    #[test]
    fn sheba_ignores_case_and_separators(
        account in "[0-9]{20}",
        lowercase in any::<bool>(),
        separators in proptest::collection::vec(prop_oneof![Just(""), Just(" "), Just("-")], 24),
    ) {
        let sheba = sheba(&account);
        let mut formatted = String::new();
        for (c, separator) in sheba.chars().zip(separators) {
            formatted.push(c);
            formatted.push_str(separator);
        }
        if lowercase {
            formatted = formatted.replacen("IR", "ir", 1);
        }
        prop_assert!(validate(IdentifierKind::Sheba, formatted.as_str()), "{}", formatted);
    }

    #[test]
    fn normalized_input_validates_like_raw_input(raw in "[ 0-9a-zA-Z۰-۹\\-]{0,30}") {
        let config = ValidatorConfig::default();
        for kind in [IdentifierKind::NationalId, IdentifierKind::CardNumber, IdentifierKind::Sheba] {
            let value = IdentifierValue::from(raw.as_str());
            let normalized = normalize(kind, Some(&value), &config).unwrap();
            prop_assert_eq!(
                validate(kind, normalized.as_str()),
                validate(kind, raw.as_str()),
                "{} {:?}", kind, raw
            );
        }
    }

    #[test]
    fn engines_never_panic(raw in "\\PC{0,40}") {
        for kind in IdentifierKind::iter() {
            let _ = validate(kind, raw.as_str());
        }
    }

    #[test]
    fn unknown_type_is_an_error_for_any_value(kind in "[a-zA-Z]{1,12}", value in "\\PC{0,20}") {
        prop_assume!(IdentifierKind::iter().all(|known| known.as_str() != kind));
        let request = ValidationRequest::new(kind.as_str(), value.as_str());
        prop_assert_eq!(validate_request(&request), Err(ValidationError::UnknownKind(kind)));
    }
}
