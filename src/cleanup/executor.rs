//! Disable executor
//!
//! Walks the candidate list in order, stopping once the per-run limit is
//! reached. A failed disable call is recorded and the walk continues.

use chrono::{DateTime, Utc};
use log::{error, info};
use serde::Serialize;

use super::filter::Candidate;
use crate::client::AtlassianApi;

/// How the executor treats candidates.
#[derive(Debug, Clone)]
pub struct DisablePlan {
    /// Maximum number of candidates processed in one run
    pub max_disable: usize,

    /// Issue disable calls (`false` is a dry run)
    pub live: bool,

    /// Message sent with every disable call
    pub reason: String,
}

/// What happened to a processed candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "error", rename_all = "snake_case")]
pub enum Action {
    Disabled,
    WouldDisable,
    Failed(String),
}

/// Per-account record of the executor's decision.
#[derive(Debug, Clone, Serialize)]
pub struct DisableOutcome {
    pub account_id: String,
    pub name: String,
    pub email: Option<String>,
    pub last_active: DateTime<Utc>,
    #[serde(flatten)]
    pub action: Action,
}

/// Result of a full executor pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionSummary {
    /// Processed candidates, in roster order
    pub outcomes: Vec<DisableOutcome>,

    /// Candidates left alone because the limit was reached
    pub untouched: usize,
}

impl ExecutionSummary {
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.action, Action::Failed(_)))
            .count()
    }

    pub fn disabled(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.action == Action::Disabled)
            .count()
    }
}

/// Disable (or, in a dry run, report) candidates up to the plan's limit.
pub async fn disable_candidates<C>(
    client: &C,
    candidates: &[Candidate],
    plan: &DisablePlan,
) -> ExecutionSummary
where
    C: AtlassianApi + ?Sized,
{
    let mut summary = ExecutionSummary::default();

    for (index, candidate) in candidates.iter().enumerate() {
        if index >= plan.max_disable {
            summary.untouched = candidates.len() - index;
            info!(
                "Reached the limit of {} accounts per run; leaving {} candidates untouched",
                plan.max_disable, summary.untouched
            );
            break;
        }

        let user = &candidate.user;
        let last_active = candidate.last_active.format("%Y-%m-%d");

        let action = if plan.live {
            match client.disable_user(&user.account_id, &plan.reason).await {
                Ok(()) => {
                    info!(
                        "Disabled {} ({}) because their last access was {}",
                        user.name, user.account_id, last_active
                    );
                    Action::Disabled
                }
                Err(err) => {
                    error!(
                        "Failed to disable {} ({}): {}",
                        user.name, user.account_id, err
                    );
                    Action::Failed(err.to_string())
                }
            }
        } else {
            info!(
                "[dry run] Would disable {} ({}) because their last access was {}",
                user.name, user.account_id, last_active
            );
            Action::WouldDisable
        };

        summary.outcomes.push(DisableOutcome {
            account_id: user.account_id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            last_active: candidate.last_active,
            action,
        });
    }

    summary
}
