//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tessera - ingestion caps and admission gates for onboarded cities.
#[derive(Debug, Parser)]
#[command(name = "tessera")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Budget configuration file (TOML)
    #[arg(short, long, global = true, env = "TESSERA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive venue caps from onboarding signals
    Caps(CapsArgs),

    /// Derive admission gates from population
    Gates(GatesArgs),

    /// Check or list thin categories
    Thin(ThinArgs),

    /// Plan budgets for cities in a city file
    Plan(PlanArgs),
}

/// Arguments for the caps command.
#[derive(Debug, Args)]
pub struct CapsArgs {
    /// City population
    #[arg(short, long)]
    pub population: Option<f64>,

    /// Search radius in meters
    #[arg(short, long)]
    pub radius_meters: Option<f64>,

    /// Grid rows
    #[arg(long)]
    pub grid_rows: Option<u32>,

    /// Grid columns
    #[arg(long)]
    pub grid_cols: Option<u32>,
}

/// Arguments for the gates command.
#[derive(Debug, Args)]
pub struct GatesArgs {
    /// City population
    #[arg(short, long)]
    pub population: Option<f64>,

    /// Category slugs to derive gates for (repeatable)
    #[arg(long = "category", value_name = "SLUG")]
    pub categories: Vec<String>,
}

/// Arguments for the thin command.
#[derive(Debug, Args)]
pub struct ThinArgs {
    /// Category slug to check
    #[arg(required_unless_present = "list")]
    pub slug: Option<String>,

    /// List every thin category
    #[arg(short, long, conflicts_with = "slug")]
    pub list: bool,
}

/// Arguments for the plan command.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// City file (TOML, `[[cities]]` entries)
    #[arg(long, value_name = "FILE")]
    pub cities: PathBuf,

    /// Only plan this city
    #[arg(long, value_name = "SLUG")]
    pub city: Option<String>,

    /// Category slugs to derive gates for (repeatable)
    #[arg(long = "category", value_name = "SLUG")]
    pub categories: Vec<String>,
}
