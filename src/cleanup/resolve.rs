//! Organisation resolution and roster fetching

use log::{info, warn};

use crate::client::models::{Organization, User};
use crate::client::{AtlassianApi, Collected, collect_pages, cursor_pages};
use crate::error::{ConfigError, Result};

/// Fetch every organisation visible to the token.
pub async fn list_orgs<C>(client: &C) -> Collected<Organization>
where
    C: AtlassianApi + ?Sized,
{
    collect_pages(
        cursor_pages(|cursor| client.list_orgs_page(cursor)),
        "organisations",
    )
    .await
}

/// Find the organisation whose name matches `name`, ignoring case.
///
/// The first match in listing order wins. No match is a configuration error.
pub async fn resolve_org<C>(client: &C, name: &str) -> Result<Organization>
where
    C: AtlassianApi + ?Sized,
{
    let Collected {
        items,
        interrupted_by,
    } = list_orgs(client).await;
    let searched = items.len();

    if let Some(org) = items.into_iter().find(|org| org.matches_name(name)) {
        info!("Resolved organisation '{}' to {}", org.name(), org.id);
        return Ok(org);
    }

    let err = match interrupted_by {
        Some(cause) => ConfigError::OrgNotFoundPartial {
            name: name.to_string(),
            searched,
            cause,
        },
        None => ConfigError::OrgNotFound {
            name: name.to_string(),
            searched,
        },
    };
    Err(err.into())
}

/// Fetch the full user roster of an organisation.
///
/// A listing failure is logged and the users fetched so far are returned.
pub async fn fetch_users<C>(client: &C, org_id: &str) -> Collected<User>
where
    C: AtlassianApi + ?Sized,
{
    let roster = collect_pages(
        cursor_pages(|cursor| client.list_users_page(org_id, cursor)),
        "users",
    )
    .await;

    if roster.is_complete() {
        info!("Fetched {} users for organisation {}", roster.items.len(), org_id);
    } else {
        warn!(
            "User listing for organisation {} is incomplete; continuing with {} users",
            org_id,
            roster.items.len()
        );
    }

    roster
}
