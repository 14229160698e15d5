//! Numeric section - rejects passwords made only of digits.

use secrecy::ExposeSecret;
use super::SectionContext;

/// Fails only when the whole password is ASCII digits.
///
/// An empty password passes this section; the similarity section rejects it.
pub fn numeric_section(ctx: &SectionContext<'_>) -> bool {
    let pwd = ctx.password.expose_secret();
    pwd.is_empty() || !pwd.bytes().all(|b| b.is_ascii_digit())
}
