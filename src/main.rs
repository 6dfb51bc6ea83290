//! atlassian-cleanup - disable inactive Atlassian Cloud accounts

use clap::Parser;

mod cleanup;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "info,atlassian_cleanup=debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match &cli.command {
        Commands::Cleanup(args) => cli::cleanup::run(&opts, args).await,
        Commands::Orgs => cli::org::list(&opts).await,
        Commands::Version => {
            println!("atlassian-cleanup version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
