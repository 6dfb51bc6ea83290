//! Organisation command implementations

use log::warn;

use crate::cleanup::list_orgs;
use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::models::OrgDisplay;
use crate::output;

/// Run the orgs command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let orgs = list_orgs(&ctx.client).await;
    if let Some(err) = &orgs.interrupted_by {
        // A partial listing is still useful, but an empty one is just a failure.
        if orgs.items.is_empty() {
            return Err(err.clone().into());
        }
        warn!("Organisation listing is incomplete: {}", err);
    }

    let display: Vec<OrgDisplay> = orgs.items.into_iter().map(OrgDisplay::from).collect();
    output::print(&display, ctx.format)
}
