//! Password rule evaluator - runs every section and builds the report.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::{default_policy, PolicyConfig};
use crate::rule::{IdentityFields, RuleId, RuleReport, RuleVerdict};
use crate::sections::{
    common_section, length_section, numeric_section, similarity_section, Section, SectionContext,
};

/// Delay before a live evaluation starts, so fast typing only evaluates once.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Section for each rule, in display order.
const SECTIONS: [(RuleId, Section); 4] = [
    (RuleId::Similarity, similarity_section),
    (RuleId::Length, length_section),
    (RuleId::Common, common_section),
    (RuleId::Numeric, numeric_section),
];

/// Evaluates the password against the default policy.
pub fn evaluate(password: &SecretString, identity: &IdentityFields) -> RuleReport {
    evaluate_with_policy(password, identity, default_policy())
}

/// Evaluates the password against `policy`.
///
/// Always returns one verdict per rule; rules are independent of each other.
pub fn evaluate_with_policy(
    password: &SecretString,
    identity: &IdentityFields,
    policy: &PolicyConfig,
) -> RuleReport {
    let ctx = SectionContext { password, identity, policy };
    RuleReport::new(SECTIONS.map(|(rule, section_fn)| RuleVerdict {
        rule,
        passed: section_fn(&ctx),
    }))
}

/// Like [`evaluate_with_policy`], but checks `token` before each section.
///
/// Returns `None` if the evaluation was cancelled.
#[cfg(feature = "async")]
pub fn evaluate_cancellable(
    password: &SecretString,
    identity: &IdentityFields,
    policy: &PolicyConfig,
    token: &CancellationToken,
) -> Option<RuleReport> {
    let ctx = SectionContext { password, identity, policy };
    let mut verdicts = [RuleVerdict { rule: RuleId::Similarity, passed: false }; 4];

    for (slot, (rule, section_fn)) in verdicts.iter_mut().zip(SECTIONS) {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password evaluation cancelled before section: {}", rule);
            return None;
        }
        *slot = RuleVerdict { rule, passed: section_fn(&ctx) };
    }

    Some(RuleReport::new(verdicts))
}

/// Async version that sends the report via channel after [`DEBOUNCE`].
///
/// Nothing is sent if `token` is cancelled first.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    identity: &IdentityFields,
    policy: &PolicyConfig,
    token: CancellationToken,
    tx: mpsc::Sender<RuleReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let Some(report) = evaluate_cancellable(password, identity, policy, &token) else {
        return;
    };

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password rule report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
