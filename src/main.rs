//! cidex CLI
//!
//! Launches the terminal interface for browsing and searching the CID-10
//! catalog served by the configured API.

use std::sync::Arc;

use clap::Parser;
use console::style;

use cidex::{Config, HttpCidProvider};

/// cidex - Terminal browser for the CID-10 catalog
#[derive(Parser)]
#[command(name = "cidex")]
#[command(author = "cidex Contributors")]
#[command(version)]
#[command(about = "Browse and search the CID-10 medical code catalog", long_about = None)]
struct Cli {
    /// Catalog API base URL (overrides $BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level for cidex.log (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() {
    let cli = Cli::parse();

    cidex::logging::init(cli.log_level);
    cidex::logging::separator("session start");
    log::info!(target: "MAIN", "cidex {} starting up", cidex::VERSION);

    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    log::info!(
        target: "MAIN",
        "base_url={} port={}",
        config.base_url,
        config.port
    );

    let result = run(&config);

    cidex::logging::flush();

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> cidex::Result<()> {
    let provider = Arc::new(HttpCidProvider::new(&config.base_url)?);
    cidex::tui::run(provider)
}
