mod bootstrap;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::output::{ConsoleSink, RunOptions};

const BANNER: &str = "Investigo - Investigate User Across Social Networks.";

#[derive(Debug, Parser)]
#[command(name = "investigo")]
#[command(about = "Check whether usernames exist across social networks")]
struct Cli {
    /// Usernames to investigate, one batch each, in order
    usernames: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Also print sites where the username was not found
    #[arg(short, long)]
    verbose: bool,

    /// Download a fresh site catalog before running
    #[arg(long)]
    update: bool,

    /// Write the supported-sites markdown list to PATH and exit
    #[arg(long, value_name = "PATH")]
    sites_md: Option<PathBuf>,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            color: !self.no_color,
            verbose: self.verbose,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = investigo_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    println!("{BANNER}");

    if cli.usernames.is_empty() && cli.sites_md.is_none() {
        return Ok(());
    }

    let client = investigo_probe::ProbeClient::from_config(&config)?;
    let catalog = bootstrap::ensure_catalog(&client, &config, cli.update).await?;

    if let Some(path) = &cli.sites_md {
        std::fs::write(path, investigo_core::render_sites_markdown(&catalog))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {} sites to {}", catalog.len(), path.display());
        return Ok(());
    }

    let mut sink = ConsoleSink::new(cli.run_options(), std::io::stdout());
    for username in &cli.usernames {
        sink.header(username, catalog.len());
        investigo_probe::run_username(
            &client,
            &catalog,
            username,
            config.max_concurrent_probes,
            &mut sink,
        )
        .await;
    }

    Ok(())
}
