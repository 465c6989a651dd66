//! Per-city budget planning
//!
//! Layers persisted city overrides over computed defaults and expands a
//! city budget into per-category gates.

use crate::{
    adjust_gates_with, derive_base_gates_with, derive_venue_caps_with, BudgetConfig, BudgetError,
};
use serde::{Deserialize, Serialize};
use tessera_domain::{is_thin_category, CityRecord, Gates, OnboardingInput, VenueCaps};

/// Where the values of a budget component came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetSource {
    /// Every field was computed
    Computed,

    /// Every field came from a persisted override
    Override,

    /// Some fields were overridden, others computed
    Mixed,
}

impl BudgetSource {
    fn from_counts(overridden: usize, total: usize) -> Self {
        match overridden {
            0 => BudgetSource::Computed,
            n if n == total => BudgetSource::Override,
            _ => BudgetSource::Mixed,
        }
    }

    /// Lowercase name for display
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetSource::Computed => "computed",
            BudgetSource::Override => "override",
            BudgetSource::Mixed => "mixed",
        }
    }
}

/// Effective ingestion budget for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityBudget {
    /// City slug
    pub city: String,

    /// Effective venue caps
    pub caps: VenueCaps,

    /// Effective baseline gates, before any category adjustment
    pub gates: Gates,

    /// Provenance of `caps`
    pub caps_source: BudgetSource,

    /// Provenance of `gates`
    pub gates_source: BudgetSource,
}

/// Gates for one category of one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGates {
    /// Category slug
    pub category: String,

    /// Whether the category is thin
    pub thin: bool,

    /// Gates candidates in this category must meet
    pub gates: Gates,
}

/// Plans ingestion budgets from a validated configuration
pub struct BudgetPlanner {
    config: BudgetConfig,
}

impl BudgetPlanner {
    /// Create a planner, validating the configuration first
    pub fn new(config: BudgetConfig) -> Result<Self, BudgetError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a planner with the default constants
    pub fn default_config() -> Self {
        Self {
            config: BudgetConfig::default(),
        }
    }

    /// The configuration this planner was built with
    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Computed venue caps, ignoring overrides
    pub fn venue_caps(&self, input: &OnboardingInput) -> VenueCaps {
        derive_venue_caps_with(&self.config.capacity, input)
    }

    /// Computed baseline gates, ignoring overrides
    pub fn base_gates(&self, population: Option<f64>) -> Gates {
        derive_base_gates_with(&self.config.gates, population)
    }

    /// Relax gates for a thin category
    pub fn adjust_for_thin(&self, gates: Gates) -> Gates {
        adjust_gates_with(&self.config.thin, gates)
    }

    /// Gates for `category`, relaxed when it is thin
    pub fn category_gates(&self, base: Gates, category: &str) -> CategoryGates {
        let thin = is_thin_category(category);
        let gates = if thin {
            self.adjust_for_thin(base)
        } else {
            base
        };

        CategoryGates {
            category: category.to_string(),
            thin,
            gates,
        }
    }

    /// Effective budget for a city.
    ///
    /// Each persisted override field replaces the matching computed value.
    /// Overrides are taken as-is: an overridden `per_tile_max` is not clamped.
    pub fn plan_city(&self, city: &CityRecord) -> CityBudget {
        let overrides = &city.overrides;

        let computed_caps = self.venue_caps(&city.input());
        let computed_gates = self.base_gates(city.population);

        let caps = overrides.apply_to_caps(computed_caps);
        let gates = overrides.apply_to_gates(computed_gates);

        if overrides.touches_caps() {
            tracing::debug!(
                city = %city.slug,
                computed_max_count = computed_caps.max_count,
                computed_per_tile_max = computed_caps.per_tile_max,
                max_count = caps.max_count,
                per_tile_max = caps.per_tile_max,
                "Cap override applied"
            );
        }
        if overrides.touches_gates() {
            tracing::debug!(
                city = %city.slug,
                computed_min_rating = computed_gates.min_rating,
                computed_min_reviews = computed_gates.min_reviews,
                min_rating = gates.min_rating,
                min_reviews = gates.min_reviews,
                "Gate override applied"
            );
        }

        let cap_overrides = [overrides.max_count.is_some(), overrides.per_tile_max.is_some()];
        let gate_overrides = [overrides.min_rating.is_some(), overrides.min_reviews.is_some()];

        CityBudget {
            city: city.slug.clone(),
            caps,
            gates,
            caps_source: BudgetSource::from_counts(
                cap_overrides.iter().filter(|set| **set).count(),
                cap_overrides.len(),
            ),
            gates_source: BudgetSource::from_counts(
                gate_overrides.iter().filter(|set| **set).count(),
                gate_overrides.len(),
            ),
        }
    }

    /// Per-category gates for a planned city
    pub fn plan_categories<S: AsRef<str>>(
        &self,
        budget: &CityBudget,
        categories: &[S],
    ) -> Vec<CategoryGates> {
        categories
            .iter()
            .map(|category| self.category_gates(budget.gates, category.as_ref()))
            .collect()
    }
}

impl Default for BudgetPlanner {
    fn default() -> Self {
        Self::default_config()
    }
}
