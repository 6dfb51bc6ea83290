//! Inactive account cleanup pipeline
//!
//! Runs the stages in order, each consuming the previous stage's full result:
//! resolve the organisation, fetch its roster, filter inactive accounts, then
//! disable them up to the per-run limit.

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

pub mod executor;
pub mod filter;
pub mod resolve;
pub mod timestamp;

pub use executor::{Action, DisableOutcome, DisablePlan, ExecutionSummary, disable_candidates};
pub use filter::{ExclusionList, FilterOutcome, FilterStats, find_inactive};
pub use resolve::{fetch_users, list_orgs, resolve_org};

use crate::client::AtlassianApi;
use crate::config::{CleanupSettings, OrgSelector};
use crate::error::Result;

/// Everything a cleanup run decided and did.
#[derive(Debug, Clone, Serialize)]
pub struct CleanupReport {
    pub org_id: String,
    pub org_name: Option<String>,
    pub cutoff: DateTime<Utc>,
    pub live: bool,
    pub roster_complete: bool,
    pub stats: FilterStats,
    pub summary: ExecutionSummary,
}

/// Run the whole pipeline once.
///
/// Only organisation resolution can fail; listing and disable failures are
/// logged and reflected in the report.
pub async fn run<C>(
    client: &C,
    settings: &CleanupSettings,
    cutoff: DateTime<Utc>,
) -> Result<CleanupReport>
where
    C: AtlassianApi + ?Sized,
{
    let (org_id, org_name) = match &settings.org {
        OrgSelector::Id(id) => {
            info!("Using configured organisation id {}", id);
            (id.clone(), None)
        }
        OrgSelector::Name(name) => {
            let org = resolve_org(client, name).await?;
            let org_name = org.name().to_string();
            (org.id, Some(org_name))
        }
    };

    let roster = fetch_users(client, &org_id).await;
    let roster_complete = roster.is_complete();

    let excluded = ExclusionList::new(&settings.excluded_emails);
    info!(
        "Looking for accounts inactive since {} ({} excluded emails)",
        cutoff.to_rfc3339(),
        excluded.len()
    );

    let FilterOutcome { candidates, stats } = find_inactive(&roster.items, cutoff, &excluded);
    info!(
        "{} users, {} active, {} excluded, {} without usable activity data, {} recently active, {} inactive",
        stats.total,
        stats.active,
        stats.excluded,
        stats.insufficient_data,
        stats.recently_active,
        stats.candidates
    );

    let plan = settings.disable_plan();
    if plan.live {
        info!("Live mode: disabling up to {} accounts", plan.max_disable);
    } else {
        info!(
            "Dry run: no accounts will be disabled (limit {})",
            plan.max_disable
        );
    }

    let summary = disable_candidates(client, &candidates, &plan).await;

    Ok(CleanupReport {
        org_id,
        org_name,
        cutoff,
        live: plan.live,
        roster_complete,
        stats,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockAtlassianClient;
    use crate::client::fixtures::{UserBuilder, org};
    use crate::error::{ConfigError, Error};
    use chrono::TimeZone;

    fn settings(org: OrgSelector, live: bool) -> CleanupSettings {
        CleanupSettings {
            org,
            max_age_months: 3,
            last_active_before: None,
            max_disable: 10,
            enable_disable: live,
            disable_reason: "automated cleanup script".to_string(),
            excluded_emails: vec!["bot@example.com".to_string()],
        }
    }

    fn cutoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    }

    async fn acme() -> MockAtlassianClient {
        MockAtlassianClient::new()
            .with_org_pages(vec![vec![org("org-0", "Globex")], vec![org("org-1", "Acme")]])
            .await
            .with_user_pages(vec![
                vec![
                    UserBuilder::new("u1")
                        .last_active("2022-01-01T00:00:00Z")
                        .build(),
                    UserBuilder::new("u2")
                        .last_active("2023-06-01T00:00:00Z")
                        .build(),
                ],
                vec![
                    UserBuilder::new("bot")
                        .email("bot@example.com")
                        .last_active("2020-01-01T00:00:00Z")
                        .build(),
                    UserBuilder::new("u3")
                        .product("jira", "2022-02-01T00:00:00.354230769Z")
                        .build(),
                ],
            ])
            .await
    }

    #[tokio::test]
    async fn test_live_run_disables_inactive_accounts() {
        let mock = acme().await;
        let settings = settings(OrgSelector::Name("acme".to_string()), true);

        let report = run(&mock, &settings, cutoff()).await.unwrap();

        assert_eq!(report.org_id, "org-1");
        assert_eq!(report.org_name.as_deref(), Some("Acme"));
        assert!(report.roster_complete);
        assert_eq!(mock.disabled_accounts().await, vec!["u1", "u3"]);
        assert_eq!(report.stats.total, 4);
        assert_eq!(report.stats.excluded, 1);
        assert_eq!(report.stats.candidates, 2);
        assert_eq!(report.summary.disabled(), 2);
    }

    #[tokio::test]
    async fn test_dry_run_reports_without_disabling() {
        let mock = acme().await;
        let settings = settings(OrgSelector::Name("Acme".to_string()), false);

        let report = run(&mock, &settings, cutoff()).await.unwrap();

        assert!(!report.live);
        assert_eq!(mock.call_counts().await.disable_user, 0);
        assert_eq!(report.summary.outcomes.len(), 2);
    }

    #[tokio::test]
    async fn test_org_id_skips_resolution() {
        let mock = acme().await;
        let settings = settings(OrgSelector::Id("org-1".to_string()), false);

        let report = run(&mock, &settings, cutoff()).await.unwrap();

        assert_eq!(report.org_id, "org-1");
        assert!(report.org_name.is_none());
        assert_eq!(mock.call_counts().await.list_orgs, 0);
    }

    #[tokio::test]
    async fn test_unknown_org_aborts_before_listing_users() {
        let mock = acme().await;
        let settings = settings(OrgSelector::Name("Hooli".to_string()), true);

        let err = run(&mock, &settings, cutoff()).await.unwrap_err();

        assert!(matches!(err, Error::Config(ConfigError::OrgNotFound { .. })));
        assert_eq!(mock.call_counts().await.list_users, 0);
        assert_eq!(mock.call_counts().await.disable_user, 0);
    }
}
