//! Caps command implementation.

use super::check_non_negative;
use crate::cli::CapsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tessera_budget::BudgetPlanner;
use tessera_domain::OnboardingInput;

/// Execute the caps command.
pub fn execute_caps(args: CapsArgs, planner: &BudgetPlanner, formatter: &Formatter) -> Result<()> {
    let input = onboarding_input(&args)?;
    let caps = planner.venue_caps(&input);

    println!("{}", formatter.format_caps(&caps)?);

    Ok(())
}

fn onboarding_input(args: &CapsArgs) -> Result<OnboardingInput> {
    check_non_negative("population", args.population)?;
    check_non_negative("radius", args.radius_meters)?;

    if args.grid_rows == Some(0) || args.grid_cols == Some(0) {
        return Err(CliError::InvalidInput(
            "Grid dimensions must be at least 1".to_string(),
        ));
    }

    Ok(OnboardingInput {
        population: args.population,
        radius_meters: args.radius_meters,
        grid_rows: args.grid_rows,
        grid_cols: args.grid_cols,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CapsArgs {
        CapsArgs {
            population: None,
            radius_meters: None,
            grid_rows: None,
            grid_cols: None,
        }
    }

    #[test]
    fn test_defaults_pass_through() {
        let input = onboarding_input(&args()).unwrap();
        assert_eq!(input, OnboardingInput::default());
    }

    #[test]
    fn test_rejects_negative_radius() {
        let mut args = args();
        args.radius_meters = Some(-10.0);
        assert!(matches!(onboarding_input(&args), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_zero_grid() {
        let mut args = args();
        args.grid_cols = Some(0);
        assert!(onboarding_input(&args).is_err());
    }
}
