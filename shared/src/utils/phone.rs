//! Phone number and PIN input utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Digits only, empty allowed: mirrors what an input field accepts keystroke by keystroke
pub static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").unwrap());

/// Check that a value contains only ASCII digits (empty is accepted)
pub fn is_digits(value: &str) -> bool {
    DIGITS_REGEX.is_match(value)
}

/// Strip a leading `+` from a dial code ("+968" -> "968")
pub fn bare_dial_code(dial_code: &str) -> &str {
    dial_code.trim().trim_start_matches('+')
}

/// Mask a phone number for logs (e.g., 968****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 7 {
        format!("{}****{}", &digits[0..3], &digits[digits.len() - 4..])
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digits() {
        assert!(is_digits(""));
        assert!(is_digits("91234567"));
        assert!(!is_digits("9123 4567"));
        assert!(!is_digits("+968"));
        assert!(!is_digits("12a"));
        // Arabic-Indic digits are not accepted
        assert!(!is_digits("١٢٣"));
    }

    #[test]
    fn test_bare_dial_code() {
        assert_eq!(bare_dial_code("+968"), "968");
        assert_eq!(bare_dial_code("20"), "20");
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("96891234567"), "968****4567");
        assert_eq!(mask_phone_number("123"), "****");
    }
}
