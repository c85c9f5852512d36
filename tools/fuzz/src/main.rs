use afl::fuzz;
use ir_ids::{
    normalize, validate, CompiledPattern, FaNumberKind, FaNumberPattern, FaWordKind,
    FaWordPattern, IdentifierKind, IdentifierValue, PasswordKind, PasswordPattern,
    PatternError, UsernameKind, UsernamePattern, ValidatorConfig,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::IntoEnumIterator;

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

/// Input layout: `<custom pattern>,<identifier or text>,<rng seed>`
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (custom_pattern, bytes) = split_bytes_once(bytes)?;
    let (input, rand_seed) = split_bytes_once(bytes)?;

    let custom_pattern = std::str::from_utf8(custom_pattern).ok()?;
    let input = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(custom_pattern, input, rng);

    Some(())
}

fn gen_pattern(custom_pattern: &str, rng: &mut StdRng) -> Result<CompiledPattern, PatternError> {
    let min = rng.gen_range(0..20);
    let max = rng.gen_range(0..40);
    match rng.gen_range::<u8, _>(0..4) {
        0 => {
            let kind = match rng.gen_range::<u8, _>(0..4) {
                0 => FaWordKind::Basic,
                1 => FaWordKind::Strict,
                2 => FaWordKind::Extended,
                _ => FaWordKind::Custom,
            };
            FaWordPattern::new(kind)
                .min(min)
                .max(max)
                .custom_pattern(custom_pattern)
                .compile()
        }
        1 => {
            let kind = match rng.gen_range::<u8, _>(0..3) {
                0 => FaNumberKind::Basic,
                1 => FaNumberKind::Strict,
                _ => FaNumberKind::Extended,
            };
            FaNumberPattern::new(kind).min(min).max(max).compile()
        }
        2 => {
            let kind = match rng.gen_range::<u8, _>(0..5) {
                0 => PasswordKind::Weak,
                1 => PasswordKind::Normal,
                2 => PasswordKind::Strong,
                3 => PasswordKind::VeryStrong,
                _ => PasswordKind::Custom,
            };
            PasswordPattern::new(kind)
                .min(min)
                .max(max)
                .custom_pattern(custom_pattern)
                .compile()
        }
        _ => {
            let kind = match rng.gen_range::<u8, _>(0..5) {
                0 => UsernameKind::Basic,
                1 => UsernameKind::Alpha,
                2 => UsernameKind::Strict,
                3 => UsernameKind::Extended,
                _ => UsernameKind::Custom,
            };
            UsernamePattern::new(kind)
                .min(min)
                .max(max)
                .custom_pattern(custom_pattern)
                .compile()
        }
    }
}

fn run_fuzz(custom_pattern: &str, input: &str, mut rng: StdRng) {
    let config = ValidatorConfig::default().fold_native_digits(rng.gen_bool(0.5));
    let value = IdentifierValue::from(input);

    for kind in IdentifierKind::iter() {
        let result = validate(kind, input);
        #[cfg(feature = "manual_test")]
        println!("{kind}: {result}");

        // re-validating a normalized value must not change the outcome
        if matches!(
            kind,
            IdentifierKind::NationalId | IdentifierKind::CardNumber | IdentifierKind::Sheba
        ) {
            if let Some(normalized) = normalize(kind, Some(&value), &ValidatorConfig::default()) {
                assert_eq!(validate(kind, normalized.as_str()), result);
            }
        }

        let _ = normalize(kind, Some(&value), &config);
    }

    if let Ok(pattern) = gen_pattern(custom_pattern, &mut rng) {
        let _is_match = pattern.is_match(input);
        #[cfg(feature = "manual_test")]
        println!("Pattern {:?}: {_is_match}", pattern.as_str());
    }
}
