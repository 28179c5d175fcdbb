//! acctview CLI
//!
//! Query, navigate and export the account console's lists from JSON fixtures

use acctview_core::logging_facility;
use acctview_core::{AcctViewError, ConsoleConfig, ExError};
use acctview_core_types::RequestId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "acctview")]
#[command(about = "acctview - query and export account console lists", long_about = None)]
struct Cli {
    /// TOML config file (logging profile, per-list page sizes)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one page of a list query described by URL parameters
    Query(commands::query::QueryArgs),
    /// Apply a filter, sort or page change to URL parameters
    Navigate(commands::navigate::NavigateArgs),
    /// Write every filtered row of a list to CSV
    Export(commands::export::ExportArgs),
    /// Order counters for the orders page header
    Stats(commands::stats::StatsArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Query(_) => "query",
            Commands::Navigate(_) => "navigate",
            Commands::Export(_) => "export",
            Commands::Stats(_) => "stats",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let request_id = RequestId::new();
    let op = cli.command.name();

    if let Err(e) = run(cli, &request_id) {
        eprintln!("Error: {}", e);
        if let Some(err) = e.downcast_ref::<AcctViewError>() {
            let ex_err = ExError::from(err.clone())
                .with_op(op)
                .with_request_id(request_id);
            eprintln!("{}", ex_err);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, request_id: &RequestId) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };
    logging_facility::init(config.logging.profile);

    let span = tracing::info_span!("command", request_id = %request_id);
    let _guard = span.enter();

    match cli.command {
        Commands::Query(args) => commands::query::execute(args, &config),
        Commands::Navigate(args) => commands::navigate::execute(args),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Stats(args) => commands::stats::execute(args),
    }
}
