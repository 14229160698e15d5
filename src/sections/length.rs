//! Length section - checks password minimum length.

use secrecy::ExposeSecret;
use super::SectionContext;

/// Checks if the password meets the policy's minimum length.
///
/// Length is counted in UTF-16 code units.
pub fn length_section(ctx: &SectionContext<'_>) -> bool {
    ctx.password.expose_secret().encode_utf16().count() >= ctx.policy.min_length
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::IdentityFields;
    use crate::sections::test_support::check;

    #[test]
    fn test_length_section_too_short() {
        assert!(!check(length_section, "1234567", &IdentityFields::default()));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert!(check(length_section, "12345678", &IdentityFields::default()));
    }

    #[test]
    fn test_length_section_empty() {
        assert!(!check(length_section, "", &IdentityFields::default()));
    }

    #[test]
    fn test_length_section_counts_code_units() {
        // four emoji are eight UTF-16 units
        assert!(check(length_section, "\u{1F600}\u{1F600}\u{1F600}\u{1F600}", &IdentityFields::default()));
        // seven two-byte chars are seven units
        assert!(!check(length_section, "łłłłłłł", &IdentityFields::default()));
    }
}
