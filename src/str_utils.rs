/// Maps Extended Arabic-Indic (Persian) and Arabic-Indic digits to ASCII digits
pub fn fold_native_digit(c: char) -> char {
    match c {
        '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
        '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
        _ => c,
    }
}

pub fn fold_native_digits(input: &str) -> String {
    input.chars().map(fold_native_digit).collect()
}

/// Unicode `White_Space` without NEL (U+0085), plus the byte order mark
/// (U+FEFF), which clients often leave in pasted values.
pub fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

pub fn trim_whitespace(input: &str) -> &str {
    input.trim_matches(is_blank)
}

pub fn is_ascii_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// True when every character of a non-empty input is the same
pub fn is_single_repeated_char(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Length of the longest run of identical consecutive characters
pub fn longest_run(input: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for c in input.chars() {
        if Some(c) == previous {
            current += 1;
        } else {
            current = 1;
            previous = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

pub fn remove_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| !is_blank(*c) && *c != '-')
        .collect()
}
