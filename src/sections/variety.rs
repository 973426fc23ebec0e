//! Character variety sections - one check per character class.
//!
//! Each check only asks whether the class is present, not how often.

use super::SectionScore;

/// `15` if the password contains an ASCII lowercase letter.
pub fn lowercase_section(password: &str) -> SectionScore {
    if password.chars().any(|c| c.is_ascii_lowercase()) { 15 } else { 0 }
}

/// `15` if the password contains an ASCII uppercase letter.
pub fn uppercase_section(password: &str) -> SectionScore {
    if password.chars().any(|c| c.is_ascii_uppercase()) { 15 } else { 0 }
}

/// `15` if the password contains an ASCII digit.
pub fn digit_section(password: &str) -> SectionScore {
    if password.chars().any(|c| c.is_ascii_digit()) { 15 } else { 0 }
}

/// `20` if the password contains anything outside `[A-Za-z0-9]`.
pub fn symbol_section(password: &str) -> SectionScore {
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) { 20 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_lowercase() {
        assert_eq!(lowercase_section("abc"), 15);
        assert_eq!(lowercase_section("ABC123!"), 0);
    }

    #[test]
    fn test_variety_uppercase() {
        assert_eq!(uppercase_section("lowercaseA"), 15);
        assert_eq!(uppercase_section("lowercase123!"), 0);
    }

    #[test]
    fn test_variety_digit() {
        assert_eq!(digit_section("NoNumbers!"), 0);
        assert_eq!(digit_section("One1"), 15);
    }

    #[test]
    fn test_variety_symbol() {
        assert_eq!(symbol_section("NoSpecial123"), 0);
        assert_eq!(symbol_section("HasAll123!@#"), 20);
        assert_eq!(symbol_section("with space"), 20);
    }

    #[test]
    fn test_variety_non_ascii_letters_count_as_symbols() {
        assert_eq!(lowercase_section("é"), 0);
        assert_eq!(symbol_section("é"), 20);
    }

    #[test]
    fn test_variety_empty_password() {
        let total = lowercase_section("")
            + uppercase_section("")
            + digit_section("")
            + symbol_section("");
        assert_eq!(total, 0);
    }
}
