//! Password rule sections
//!
//! Each section decides one rule. `true` means the rule passed.

mod common;
mod length;
mod numeric;
mod similarity;

pub use common::common_section;
pub use length::length_section;
pub use numeric::numeric_section;
pub use similarity::similarity_section;

use secrecy::SecretString;

use crate::policy::PolicyConfig;
use crate::rule::IdentityFields;

/// Inputs shared by every section.
pub struct SectionContext<'a> {
    pub password: &'a SecretString,
    pub identity: &'a IdentityFields,
    pub policy: &'a PolicyConfig,
}

/// Signature of a section function.
pub type Section = fn(&SectionContext<'_>) -> bool;

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Runs `section` against the default policy.
    pub fn check(section: Section, password: &str, identity: &IdentityFields) -> bool {
        let policy = PolicyConfig::default();
        let password = SecretString::new(password.to_string().into());
        section(&SectionContext {
            password: &password,
            identity,
            policy: &policy,
        })
    }
}
