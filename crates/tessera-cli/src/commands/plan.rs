//! Plan command implementation.

use crate::cli::PlanArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use serde::Serialize;
use tessera_budget::{BudgetPlanner, CategoryGates, CityBudget};
use tessera_cities::{CityCache, TomlCitySource};
use tessera_domain::CityRecord;

/// Budget and per-category gates for one city.
#[derive(Debug, Clone, Serialize)]
pub struct CityPlan {
    /// Effective city budget
    pub budget: CityBudget,

    /// Gates for each requested category
    pub categories: Vec<CategoryGates>,
}

/// Execute the plan command.
pub fn execute_plan(args: PlanArgs, planner: &BudgetPlanner, formatter: &Formatter) -> Result<()> {
    let source = TomlCitySource::new(&args.cities);
    let mut cache = CityCache::per_run();
    let cities = cache.get_or_load(&source)?;

    let plans = plan_cities(cities, args.city.as_deref(), &args.categories, planner)?;
    println!("{}", formatter.format_plans(&plans)?);

    Ok(())
}

/// Plan every city, or only `only` when given.
pub fn plan_cities(
    cities: &[CityRecord],
    only: Option<&str>,
    categories: &[String],
    planner: &BudgetPlanner,
) -> Result<Vec<CityPlan>> {
    let selected: Vec<&CityRecord> = match only {
        Some(slug) => {
            let city = cities
                .iter()
                .find(|city| city.slug == slug)
                .ok_or_else(|| CliError::CityNotFound(slug.to_string()))?;
            vec![city]
        }
        None => cities.iter().collect(),
    };

    tracing::debug!(cities = selected.len(), categories = categories.len(), "Planning budgets");

    Ok(selected
        .into_iter()
        .map(|city| {
            let budget = planner.plan_city(city);
            let categories = planner.plan_categories(&budget, categories);
            CityPlan { budget, categories }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<CityRecord> {
        let mut lisbon = CityRecord::new("lisbon", "Lisbon");
        lisbon.population = Some(545_000.0);

        let mut paris = CityRecord::new("paris", "Paris");
        paris.population = Some(11_000_000.0);
        paris.overrides.per_tile_max = Some(80);

        vec![lisbon, paris]
    }

    #[test]
    fn test_plan_all_cities() {
        let planner = BudgetPlanner::default_config();
        let categories = vec!["cafe".to_string(), "theater".to_string()];
        let plans = plan_cities(&cities(), None, &categories, &planner).unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].budget.gates.min_reviews, 2);
        assert_eq!(plans[0].categories[1].gates.min_reviews, 1);
        assert_eq!(plans[1].budget.caps.per_tile_max, 80);
        assert_eq!(plans[1].categories[0].gates.min_reviews, 6);
        assert_eq!(plans[1].categories[1].gates.min_reviews, 5);
    }

    #[test]
    fn test_plan_single_city() {
        let planner = BudgetPlanner::default_config();
        let plans = plan_cities(&cities(), Some("paris"), &[], &planner).unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].budget.city, "paris");
        assert!(plans[0].categories.is_empty());
    }

    #[test]
    fn test_plan_unknown_city() {
        let planner = BudgetPlanner::default_config();
        let result = plan_cities(&cities(), Some("atlantis"), &[], &planner);
        assert!(matches!(result, Err(CliError::CityNotFound(slug)) if slug == "atlantis"));
    }
}
