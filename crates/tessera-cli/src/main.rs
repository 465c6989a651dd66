//! Tessera CLI - print ingestion budgets for onboarded cities.

use clap::Parser;
use tessera_cli::commands;
use tessera_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so JSON output on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> tessera_cli::Result<()> {
    let planner = commands::load_planner(cli.config.as_deref())?;
    let formatter = Formatter::new(cli.format.unwrap_or_default().into());

    match cli.command {
        Command::Caps(args) => commands::execute_caps(args, &planner, &formatter),
        Command::Gates(args) => commands::execute_gates(args, &planner, &formatter),
        Command::Thin(args) => commands::execute_thin(args, &formatter),
        Command::Plan(args) => commands::execute_plan(args, &planner, &formatter),
    }
}
