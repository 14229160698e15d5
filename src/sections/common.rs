//! Common section - checks the password against the deny-list.

use secrecy::ExposeSecret;
use super::SectionContext;

/// Fails if the password equals or contains any deny-list token.
pub fn common_section(ctx: &SectionContext<'_>) -> bool {
    !ctx.policy.deny_list.matches(ctx.password.expose_secret())
}
