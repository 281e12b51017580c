//! Field rule predicates
//!
//! Each rule is a standalone predicate so the character classes and length
//! bounds can be checked in isolation from the form.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters accepted as the special character of a password
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Local phone number, leading `0` optional: landlines `2,3,4,8,9` + 7 digits,
/// mobiles `5` + one of `0-6,8,9` + 7 digits
static PHONE_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0?(([23489][0-9]{7})|5[012345689][0-9]{7})$").unwrap()
});

static UPPERCASE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

/// Check the string form of a phone number against the local number shape
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_PATTERN.is_match(value)
}

pub fn has_uppercase_letter(value: &str) -> bool {
    UPPERCASE_PATTERN.is_match(value)
}

pub fn has_special_character(value: &str) -> bool {
    value.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c))
}

/// Length in characters, not bytes
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

pub fn exceeds_length(value: &str, max: usize) -> bool {
    char_length(value) > max
}

/// Password policy: every requirement must hold on the same string
pub fn is_strong_password(value: &str, min_length: usize, max_length: usize) -> bool {
    let length = char_length(value);

    has_uppercase_letter(value)
        && has_special_character(value)
        && (min_length..=max_length).contains(&length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mobile_numbers() {
        assert!(is_valid_phone_number("548088924"));
        assert!(is_valid_phone_number("0548088929"));
        assert!(is_valid_phone_number("501234567"));
        assert!(is_valid_phone_number("591234567"));
    }

    #[test]
    fn test_mobile_excluded_prefix() {
        assert!(!is_valid_phone_number("571234567"));
        assert!(!is_valid_phone_number("0571234567"));
    }

    #[test]
    fn test_valid_landlines() {
        assert!(is_valid_phone_number("036357269"));
        assert!(is_valid_phone_number("36357269"));
        assert!(is_valid_phone_number("21234567"));
        assert!(is_valid_phone_number("91234567"));
    }

    #[test]
    fn test_invalid_phone_numbers() {
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("11234567"));
        assert!(!is_valid_phone_number("71234567"));
        assert!(!is_valid_phone_number("5480889245"));
        assert!(!is_valid_phone_number("00548088924"));
        assert!(!is_valid_phone_number("-548088924"));
        assert!(!is_valid_phone_number("54808892a"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(!is_valid_phone_number("٥٤٨٠٨٨٩٢٤"));
    }

    #[test]
    fn test_uppercase_letter() {
        assert!(has_uppercase_letter("qweQWE!"));
        assert!(!has_uppercase_letter("qweqwe!"));
        assert!(!has_uppercase_letter("ÉÀ!"));
    }

    #[test]
    fn test_special_character() {
        for c in PASSWORD_SPECIAL_CHARACTERS.chars() {
            assert!(has_special_character(&format!("abc{}", c)), "{}", c);
        }
        assert!(!has_special_character("qweQWE"));
        assert!(!has_special_character("qwe-QWE_"));
        assert!(!has_special_character("qwe(QWE)+"));
    }

    #[test]
    fn test_strong_password() {
        assert!(is_strong_password("qweQWE!", 6, 12));
        assert!(is_strong_password("Abcd!e", 6, 12));
        assert!(is_strong_password("Abcdefghij!k", 6, 12));
    }

    #[test]
    fn test_weak_passwords() {
        assert!(!is_strong_password("qweqwe", 6, 12));
        assert!(!is_strong_password("qweqwe!", 6, 12));
        assert!(!is_strong_password("qweQWE", 6, 12));
        assert!(!is_strong_password("Ab!cd", 6, 12));
        assert!(!is_strong_password("Abcdefghij!kl", 6, 12));
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(char_length("שלום"), 4);
        assert!(!exceeds_length("שלום", 4));
        assert!(exceeds_length("abcde", 4));
    }
}
