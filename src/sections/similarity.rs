//! Similarity section - rejects passwords too close to the user's identity.

use secrecy::ExposeSecret;
use super::SectionContext;
use crate::similarity::ratio;

/// Checks the password against each identity field.
///
/// Fails when the password is empty, or when any field at least
/// `min_identity_field_len` long is contained in the password, contains the
/// password, or scores above `similarity_threshold`. Comparison ignores case.
pub fn similarity_section(ctx: &SectionContext<'_>) -> bool {
    let pwd = ctx.password.expose_secret();
    if pwd.is_empty() {
        return false;
    }

    let pwd = pwd.to_lowercase();
    !ctx.identity.fields().iter().any(|field| {
        if field.encode_utf16().count() < ctx.policy.min_identity_field_len {
            return false;
        }
        let field = field.to_lowercase();

        if pwd.contains(field.as_str()) || field.contains(pwd.as_str()) {
            return true;
        }
        ratio(&pwd, &field) > ctx.policy.similarity_threshold
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::IdentityFields;
    use crate::sections::test_support::check;

    fn username(name: &str) -> IdentityFields {
        IdentityFields { username: name.to_string(), ..Default::default() }
    }

    #[test]
    fn test_similarity_section_empty_password() {
        assert!(!check(similarity_section, "", &IdentityFields::default()));
    }

    #[test]
    fn test_similarity_section_no_identity() {
        assert!(check(similarity_section, "anything", &IdentityFields::default()));
    }

    #[test]
    fn test_similarity_section_identical_username() {
        assert!(!check(similarity_section, "johnsmith", &username("johnsmith")));
    }

    #[test]
    fn test_similarity_section_contains_field_ignoring_case() {
        assert!(!check(similarity_section, "XX-JohnSmith-99", &username("johnsmith")));
    }

    #[test]
    fn test_similarity_section_field_contains_password() {
        let identity = IdentityFields { email: "john.smith@example.com".into(), ..Default::default() };
        assert!(!check(similarity_section, "Example", &identity));
    }

    #[test]
    fn test_similarity_section_close_edit_distance() {
        // one substitution in nine: ratio 8/9
        assert!(!check(similarity_section, "johnsmitx", &username("johnsmith")));
    }

    #[test]
    fn test_similarity_section_at_threshold_passes() {
        // distance 2 over 5 is exactly 0.6, not above it
        assert!(check(similarity_section, "abcxy", &username("abcde")));
    }

    #[test]
    fn test_similarity_section_unrelated() {
        let identity = IdentityFields {
            username: "johnsmith".into(),
            email: "john@x.com".into(),
            ..Default::default()
        };
        assert!(check(similarity_section, "Xk9#mQ2!", &identity));
    }

    #[test]
    fn test_similarity_section_short_fields_ignored() {
        let identity = IdentityFields {
            username: "jo".into(),
            first_name: "J".into(),
            last_name: "ab".into(),
            ..Default::default()
        };
        assert!(check(similarity_section, "jo", &identity));
        assert!(check(similarity_section, "abababab", &identity));
        assert!(check(similarity_section, "xxjoxx", &identity));
    }
}
