//! Inactivity filter
//!
//! Selects the active, non-excluded accounts whose most recent activity is
//! strictly older than the cutoff. Per-product activity wins over the
//! account-level `last_active` whenever any product reports a timestamp.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;

use super::timestamp::parse_timestamp;
use crate::client::models::User;

/// Emails of accounts that must never be disabled (bots, service users).
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    emails: HashSet<String>,
}

impl ExclusionList {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            emails: emails
                .into_iter()
                .map(|email| normalize_email(email.as_ref()))
                .filter(|email| !email.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, email: Option<&str>) -> bool {
        email.is_some_and(|email| self.emails.contains(&normalize_email(email)))
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }
}

/// Canonical form used for every exclusion comparison.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// An account selected for disabling.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub user: User,

    /// Most recent activity seen for the account
    pub last_active: DateTime<Utc>,
}

/// Account counts at each filtering stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub total: usize,
    pub active: usize,
    pub excluded: usize,
    pub insufficient_data: usize,
    pub recently_active: usize,
    pub candidates: usize,
}

/// Output of [`find_inactive`].
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub candidates: Vec<Candidate>,
    pub stats: FilterStats,
}

/// How an account's activity compares with the cutoff.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Activity {
    Inactive(DateTime<Utc>),
    Recent(DateTime<Utc>),
    Unknown(String),
}

/// Judge a single account against the cutoff.
fn assess(user: &User, cutoff: DateTime<Utc>) -> Activity {
    let product_timestamps: Vec<&str> = user
        .product_access
        .iter()
        .filter_map(|product| product.last_active.as_deref())
        .collect();

    let latest = if product_timestamps.is_empty() {
        let Some(raw) = user.last_active.as_deref() else {
            return Activity::Unknown("no activity recorded".to_string());
        };
        match parse_timestamp(raw) {
            Some(instant) => instant,
            None => return Activity::Unknown(format!("unreadable last_active '{}'", raw)),
        }
    } else {
        let mut latest: Option<DateTime<Utc>> = None;
        for raw in product_timestamps {
            match parse_timestamp(raw) {
                Some(instant) => latest = latest.max(Some(instant)),
                None => {
                    return Activity::Unknown(format!("unreadable product last_active '{}'", raw));
                }
            }
        }
        match latest {
            Some(instant) => instant,
            None => return Activity::Unknown("no activity recorded".to_string()),
        }
    };

    if latest < cutoff {
        Activity::Inactive(latest)
    } else {
        Activity::Recent(latest)
    }
}

/// Select disable candidates from a roster, preserving roster order.
pub fn find_inactive(
    users: &[User],
    cutoff: DateTime<Utc>,
    excluded: &ExclusionList,
) -> FilterOutcome {
    let mut stats = FilterStats {
        total: users.len(),
        ..FilterStats::default()
    };
    let mut candidates = Vec::new();

    for user in users.iter().filter(|user| user.is_active()) {
        stats.active += 1;

        if excluded.contains(user.email.as_deref()) {
            debug!("Skipping excluded account {} ({})", user.account_id, user.name);
            stats.excluded += 1;
            continue;
        }

        match assess(user, cutoff) {
            Activity::Inactive(last_active) => candidates.push(Candidate {
                user: user.clone(),
                last_active,
            }),
            Activity::Recent(last_active) => {
                debug!(
                    "Keeping {} ({}): last active {}",
                    user.account_id,
                    user.name,
                    last_active.to_rfc3339()
                );
                stats.recently_active += 1;
            }
            Activity::Unknown(reason) => {
                warn!(
                    "Skipping {} ({}): {}",
                    user.account_id, user.name, reason
                );
                stats.insufficient_data += 1;
            }
        }
    }

    stats.candidates = candidates.len();
    FilterOutcome { candidates, stats }
}
