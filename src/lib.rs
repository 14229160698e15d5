//! Password rule engine
//!
//! This library evaluates a candidate password against four independent
//! rules and returns a pass/fail verdict for each, ready to drive live
//! feedback next to a password field:
//!
//! - `similarity`: not too close to the username, email or names
//! - `length`: at least 8 characters
//! - `common`: does not contain a commonly used password
//! - `numeric`: not made only of digits
//!
//! Client-side checks are advisory; servers should run the same evaluation.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Serializes verdicts and identity fields
//!
//! # Environment Variables
//!
//! Read by [`PolicyConfig::from_env`] only:
//!
//! - `PWD_DENY_LIST_PATH`: file replacing the embedded deny-list
//! - `PWD_MIN_LENGTH`: minimum password length (default: 8)
//! - `PWD_SIMILARITY_THRESHOLD`: similarity ratio limit (default: 0.6)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{evaluate, IdentityFields, RuleId};
//! use secrecy::SecretString;
//!
//! let identity = IdentityFields {
//!     username: "johnsmith".to_string(),
//!     email: "john@example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let password = SecretString::new("JohnSmith1".to_string().into());
//! let report = evaluate(&password, &identity);
//!
//! assert!(!report.passed(RuleId::Similarity));
//! for verdict in &report {
//!     println!("{}: {}", verdict.rule, verdict.passed);
//! }
//! ```

mod deny_list;
mod evaluator;
mod policy;
mod rule;
mod sections;
pub mod similarity;

// Public API
pub use deny_list::{DenyList, DenyListError};
pub use evaluator::{evaluate, evaluate_with_policy};
pub use policy::{default_policy, PolicyConfig, PolicyError};
pub use rule::{IdentityFields, RuleId, RuleReport, RuleVerdict};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_cancellable, evaluate_tx, DEBOUNCE};
