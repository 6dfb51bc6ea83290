//! Cleanup command implementation

use std::time::{Duration, Instant};

use chrono::Utc;
use colored::Colorize;
use dialoguer::Confirm;
use log::{info, warn};

use crate::cleanup::{self, CleanupReport};
use crate::cli::{CleanupArgs, CommandContext, GlobalOptions, OutputFormat};
use crate::config::OrgSelector;
use crate::error::{Error, Result};
use crate::models::OutcomeDisplay;
use crate::output::{json, table};

/// Run the cleanup command
pub async fn run(opts: &GlobalOptions, args: &CleanupArgs) -> Result<()> {
    let started = Instant::now();

    let ctx = CommandContext::new(opts)?;
    let settings = ctx.cleanup_settings(args)?;
    let cutoff = settings.cutoff(Utc::now());

    if settings.enable_disable && !args.yes {
        let target = match &settings.org {
            OrgSelector::Name(name) => format!("organisation \"{}\"", name),
            OrgSelector::Id(id) => format!("organisation {}", id),
        };
        eprintln!(
            "{} Live mode: up to {} accounts in {} inactive since {} will be disabled.",
            "⚠".yellow(),
            settings.max_disable,
            target,
            cutoff.format("%Y-%m-%d")
        );

        let confirm = Confirm::new()
            .with_prompt("Continue?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    let report = cleanup::run(&ctx.client, &settings, cutoff).await?;

    match ctx.format {
        OutputFormat::Table => print_report(&report, started.elapsed()),
        OutputFormat::Json => println!("{}", json::format_json(&report)?),
    }

    info!("Finished in {:.2?}", started.elapsed());

    let failed = report.summary.failed();
    if failed > 0 {
        return Err(Error::DisableFailures {
            failed,
            attempted: report.summary.outcomes.len(),
        });
    }

    Ok(())
}

fn print_report(report: &CleanupReport, elapsed: Duration) {
    let org = match &report.org_name {
        Some(name) => format!("{} ({})", name, report.org_id),
        None => report.org_id.clone(),
    };
    let mode = if report.live {
        "live".red().bold()
    } else {
        "dry run".green().bold()
    };

    println!("{} {}", "Organisation:".bold(), org);
    println!(
        "{} {}",
        "Inactive before:".bold(),
        report.cutoff.format("%Y-%m-%d %H:%M UTC")
    );
    println!("{} {}", "Mode:".bold(), mode);
    println!();

    let rows: Vec<OutcomeDisplay> = report
        .summary
        .outcomes
        .iter()
        .map(OutcomeDisplay::from)
        .collect();
    println!("{}", table::format_table(&rows, "No inactive accounts found."));
    println!();

    let stats = &report.stats;
    println!(
        "{} users: {} active, {} excluded, {} without activity data, {} recently active, {} inactive",
        stats.total,
        stats.active,
        stats.excluded,
        stats.insufficient_data,
        stats.recently_active,
        stats.candidates
    );

    let summary = &report.summary;
    if report.live {
        let failed = summary.failed();
        let line = format!("{} disabled, {} failed", summary.disabled(), failed);
        if failed > 0 {
            println!("{}", line.red());
        } else {
            println!("{}", line.green());
        }
    } else {
        println!(
            "{} accounts would be disabled (pass --enable-disable to apply)",
            summary.outcomes.len()
        );
    }

    if summary.untouched > 0 {
        println!(
            "{} more inactive accounts left for a later run (limit reached)",
            summary.untouched
        );
    }

    println!("Completed in {:.2?}", elapsed);

    if !report.roster_complete {
        warn!("The user listing was incomplete; some inactive accounts may have been missed");
    }
}
