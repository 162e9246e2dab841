//! Progressive input formatters for form fields
//!
//! These run on every keystroke, so they must be total: partial input
//! that has not yet reached a recognized digit count passes through
//! unchanged instead of being half-formatted (which would fight the
//! user's caret). Separators already typed never count toward the
//! length checks.

/// Format a WhatsApp number for display as the user types
///
/// 13 digits render as `+55 (21) 99999-9999`, 11 digits as
/// `(21) 99999-9999`, anything else (including partial input) is
/// returned unchanged. Empty input renders as the empty string.
pub fn format_whatsapp(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        13 => format!(
            "+{} ({}) {}-{}",
            &digits[..2],
            &digits[2..4],
            &digits[4..9],
            &digits[9..]
        ),
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        _ => input.to_string(),
    }
}

/// Format a CEP for display as the user types
///
/// 8 digits render as `20040-020`; anything else is returned unchanged.
pub fn format_cep(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    if digits.len() == 8 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        input.to_string()
    }
}
