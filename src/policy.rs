//! Policy configuration
//!
//! Thresholds and the deny-list used by the rule sections.

use std::sync::LazyLock;
use thiserror::Error;

use crate::deny_list::{DenyList, DenyListError};

pub const DENY_LIST_PATH_VAR: &str = "PWD_DENY_LIST_PATH";
pub const MIN_LENGTH_VAR: &str = "PWD_MIN_LENGTH";
pub const SIMILARITY_THRESHOLD_VAR: &str = "PWD_SIMILARITY_THRESHOLD";

static DEFAULT_POLICY: LazyLock<PolicyConfig> = LazyLock::new(PolicyConfig::default);

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error(transparent)]
    DenyList(#[from] DenyListError),
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Tunable password policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    /// Minimum length in UTF-16 code units.
    pub min_length: usize,
    /// Similarity ratio above which a candidate is too close to an identity field.
    pub similarity_threshold: f64,
    /// Identity fields shorter than this are ignored by the similarity rule.
    pub min_identity_field_len: usize,
    pub deny_list: DenyList,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: 8,
            similarity_threshold: 0.6,
            min_identity_field_len: 3,
            deny_list: DenyList::embedded(),
        }
    }
}

impl PolicyConfig {
    /// Builds a policy from the defaults, overridden by environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_DENY_LIST_PATH`: file replacing the embedded deny-list
    /// - `PWD_MIN_LENGTH`: minimum length
    /// - `PWD_SIMILARITY_THRESHOLD`: ratio in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns error if the deny-list file cannot be loaded or a variable
    /// does not parse.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Ok(path) = std::env::var(DENY_LIST_PATH_VAR) {
            policy.deny_list = DenyList::from_path(&path)?;
        }

        if let Ok(value) = std::env::var(MIN_LENGTH_VAR) {
            policy.min_length = value
                .trim()
                .parse()
                .map_err(|_| PolicyError::InvalidValue { var: MIN_LENGTH_VAR, value })?;
        }

        if let Ok(value) = std::env::var(SIMILARITY_THRESHOLD_VAR) {
            policy.similarity_threshold = match value.trim().parse::<f64>() {
                Ok(t) if (0.0..=1.0).contains(&t) => t,
                _ => {
                    return Err(PolicyError::InvalidValue {
                        var: SIMILARITY_THRESHOLD_VAR,
                        value,
                    });
                }
            };
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            min_length = policy.min_length,
            similarity_threshold = policy.similarity_threshold,
            deny_list = policy.deny_list.len(),
            "Password policy loaded from environment"
        );

        Ok(policy)
    }
}

/// Returns the process-wide default policy.
pub fn default_policy() -> &'static PolicyConfig {
    &DEFAULT_POLICY
}
