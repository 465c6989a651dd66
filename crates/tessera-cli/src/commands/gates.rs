//! Gates command implementation.

use super::check_non_negative;
use crate::cli::GatesArgs;
use crate::error::Result;
use crate::output::Formatter;
use tessera_budget::BudgetPlanner;

/// Execute the gates command.
pub fn execute_gates(
    args: GatesArgs,
    planner: &BudgetPlanner,
    formatter: &Formatter,
) -> Result<()> {
    check_non_negative("population", args.population)?;

    let base = planner.base_gates(args.population);
    let categories: Vec<_> = args
        .categories
        .iter()
        .map(|category| planner.category_gates(base, category))
        .collect();

    println!("{}", formatter.format_gates(&base, &categories)?);

    Ok(())
}
