//! Actions-Harvest main entry point
//!
//! This is the command-line interface for the Actions-Harvest listing harvester.

use actions_harvest::config::{read_config_with_hash, validate, Config};
use actions_harvest::crawler::run_crawl;
use actions_harvest::output::{print_statistics, CrawlStatistics};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Actions-Harvest: a polite listing harvester
///
/// Walks every page of a paginated listing, follows each entry to its article,
/// and writes one JSON file per article plus an index.json summary.
#[derive(Parser, Debug)]
#[command(name = "actions-harvest")]
#[command(version)]
#[command(about = "A polite listing harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the listing root URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the output directory
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("actions_harvest=info,warn"),
            1 => EnvFilter::new("actions_harvest=debug,info"),
            2 => EnvFilter::new("actions_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = read_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(base_url) = &cli.base_url {
        config.crawler.base_url = base_url.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.display().to_string();
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Actions-Harvest Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Listing root: {}", config.crawler.base_url);
    println!(
        "  Minimum request delay: {}ms",
        config.crawler.min_request_delay
    );
    println!("  Request timeout: {}s", config.crawler.request_timeout);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting collection from {}",
        config.crawler.base_url
    );

    let (report, summary) = match run_crawl(config).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            return Err(e.into());
        }
    };

    if report.is_empty() {
        tracing::warn!("The listing was reachable but no actions were collected");
    } else {
        tracing::info!("Collected {} total actions", report.documents.len());
    }
    print_statistics(&CrawlStatistics::new(&report, &summary));

    println!(
        "\n✓ Done! Check the '{}' directory for the results.",
        summary.directory.display()
    );

    Ok(())
}
