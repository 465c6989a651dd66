//! Command implementations.

pub mod caps;
pub mod gates;
pub mod plan;
pub mod thin;

pub use self::caps::execute_caps;
pub use self::gates::execute_gates;
pub use self::plan::{execute_plan, CityPlan};
pub use self::thin::execute_thin;

use crate::error::{CliError, Result};
use std::path::Path;
use tessera_budget::{BudgetConfig, BudgetPlanner};

/// Build a planner from an optional configuration file.
pub fn load_planner(config_path: Option<&Path>) -> Result<BudgetPlanner> {
    match config_path {
        Some(path) => Ok(BudgetPlanner::new(BudgetConfig::from_file(path)?)?),
        None => {
            tracing::debug!("No budget config given, using built-in constants");
            Ok(BudgetPlanner::default_config())
        }
    }
}

/// Reject onboarding values the derivation is not meant to see.
pub(crate) fn check_non_negative(name: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(CliError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            name, v
        ))),
        _ => Ok(()),
    }
}
