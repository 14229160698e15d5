//! Rule identifiers, verdicts and the per-evaluation report.

use std::fmt;

use crate::policy::PolicyConfig;

/// One of the four password rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleId {
    Similarity,
    Length,
    Common,
    Numeric,
}

impl RuleId {
    /// Display order of the rules.
    pub const ALL: [RuleId; 4] = [
        RuleId::Similarity,
        RuleId::Length,
        RuleId::Common,
        RuleId::Numeric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Similarity => "similarity",
            RuleId::Length => "length",
            RuleId::Common => "common",
            RuleId::Numeric => "numeric",
        }
    }

    /// Requirement text shown next to the rule's indicator.
    pub fn requirement(&self, policy: &PolicyConfig) -> String {
        match self {
            RuleId::Similarity => {
                "Password can't be too similar to your other personal information".to_string()
            }
            RuleId::Length => format!(
                "Password must be at least {} characters",
                policy.min_length
            ),
            RuleId::Common => "Password can't be a commonly used password".to_string(),
            RuleId::Numeric => "Password can't be entirely numeric".to_string(),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleVerdict {
    pub rule: RuleId,
    pub passed: bool,
}

/// Verdicts for every rule, in [`RuleId::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleReport {
    verdicts: [RuleVerdict; 4],
}

impl RuleReport {
    pub(crate) fn new(verdicts: [RuleVerdict; 4]) -> Self {
        Self { verdicts }
    }

    pub fn verdicts(&self) -> &[RuleVerdict; 4] {
        &self.verdicts
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleVerdict> {
        self.verdicts.iter()
    }

    /// `true` when every rule passed.
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }

    pub fn passed(&self, rule: RuleId) -> bool {
        self.verdicts
            .iter()
            .find(|v| v.rule == rule)
            .is_some_and(|v| v.passed)
    }

    /// Failed rules in display order.
    pub fn failed(&self) -> Vec<RuleId> {
        self.verdicts
            .iter()
            .filter(|v| !v.passed)
            .map(|v| v.rule)
            .collect()
    }

    /// Requirement text for each failed rule.
    pub fn reasons(&self, policy: &PolicyConfig) -> Vec<String> {
        self.failed().iter().map(|r| r.requirement(policy)).collect()
    }
}

impl<'a> IntoIterator for &'a RuleReport {
    type Item = &'a RuleVerdict;
    type IntoIter = std::slice::Iter<'a, RuleVerdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.verdicts.iter()
    }
}

/// Identity data the candidate must not resemble.
///
/// Missing fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdentityFields {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl IdentityFields {
    pub fn fields(&self) -> [&str; 4] {
        [
            self.username.as_str(),
            self.email.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
        ]
    }
}
