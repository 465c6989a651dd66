//! Budget configuration
//!
//! Named constants for every tier breakpoint and multiplier, plus a
//! deserializable configuration that defaults to exactly those constants.

use crate::BudgetError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tessera_domain::{Gates, Threshold, Tier, TierTable};

/// Population assumed when onboarding did not capture one
pub const DEFAULT_POPULATION: f64 = 2_000_000.0;

/// Search radius assumed when onboarding did not capture one
pub const DEFAULT_RADIUS_METERS: f64 = 8000.0;

/// Grid rows assumed when onboarding did not capture them
pub const DEFAULT_GRID_ROWS: u32 = 3;

/// Grid columns assumed when onboarding did not capture them
pub const DEFAULT_GRID_COLS: u32 = 3;

/// Venues per km² for cities below every density tier
pub const BASELINE_DENSITY_PER_KM2: f64 = 20.0;

/// Population above which the metro density applies
pub const METRO_POPULATION: f64 = 3_000_000.0;

/// Venues per km² for metro cities
pub const METRO_DENSITY_PER_KM2: f64 = 30.0;

/// Population above which the megacity density applies
pub const MEGACITY_POPULATION: f64 = 8_000_000.0;

/// Venues per km² for megacities
pub const MEGACITY_DENSITY_PER_KM2: f64 = 40.0;

/// Per-tile cap as a multiple of the average venues per tile
pub const PER_TILE_MULTIPLIER: f64 = 2.5;

/// Lowest per-tile cap
pub const PER_TILE_FLOOR: u32 = 25;

/// Highest per-tile cap
pub const PER_TILE_CEILING: u32 = 120;

/// Population above which the strict gates apply
pub const LARGE_CITY_POPULATION: f64 = 8_000_000.0;

/// Population below which the relaxed gates apply
pub const SMALL_CITY_POPULATION: f64 = 1_000_000.0;

/// Gates for cities between the small and large breakpoints
pub const BASELINE_GATES: Gates = Gates {
    min_rating: 4.0,
    min_reviews: 4,
};

/// Gates for cities above [`LARGE_CITY_POPULATION`]
pub const LARGE_CITY_GATES: Gates = Gates {
    min_rating: 4.1,
    min_reviews: 6,
};

/// Gates for cities below [`SMALL_CITY_POPULATION`]
pub const SMALL_CITY_GATES: Gates = Gates {
    min_rating: 3.8,
    min_reviews: 2,
};

/// Rating subtracted from the gate of a thin category
pub const THIN_RATING_RELAXATION: f64 = 0.2;

/// Review count subtracted from the gate of a thin category
pub const THIN_REVIEW_RELAXATION: u32 = 1;

/// Review count a thin-category gate never drops below
pub const MIN_REVIEWS_FLOOR: u32 = 1;

/// Full budget configuration
///
/// # Examples
///
/// ```
/// use tessera_budget::BudgetConfig;
///
/// let config = BudgetConfig::from_toml_str(r#"
///     [capacity]
///     per_tile_ceiling = 150
/// "#).unwrap();
///
/// assert_eq!(config.capacity.per_tile_ceiling, 150);
/// assert_eq!(config.capacity.per_tile_floor, 25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Capacity deriver settings
    #[serde(default)]
    pub capacity: CapacityConfig,

    /// Gate deriver settings
    #[serde(default)]
    pub gates: GateConfig,

    /// Thin-category relaxation
    #[serde(default)]
    pub thin: ThinCategoryRelaxation,
}

/// Settings for the capacity deriver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityConfig {
    /// Population used when the input has none
    pub default_population: f64,

    /// Radius in meters used when the input has none
    pub default_radius_meters: f64,

    /// Grid rows used when the input has none
    pub default_grid_rows: u32,

    /// Grid columns used when the input has none
    pub default_grid_cols: u32,

    /// Venues per km² selected by population
    pub density: TierTable<f64>,

    /// Per-tile cap as a multiple of the average per tile
    pub per_tile_multiplier: f64,

    /// Lowest per-tile cap
    pub per_tile_floor: u32,

    /// Highest per-tile cap
    pub per_tile_ceiling: u32,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            default_population: DEFAULT_POPULATION,
            default_radius_meters: DEFAULT_RADIUS_METERS,
            default_grid_rows: DEFAULT_GRID_ROWS,
            default_grid_cols: DEFAULT_GRID_COLS,
            density: TierTable::new(
                BASELINE_DENSITY_PER_KM2,
                vec![
                    Tier::above(METRO_POPULATION, METRO_DENSITY_PER_KM2),
                    Tier::above(MEGACITY_POPULATION, MEGACITY_DENSITY_PER_KM2),
                ],
            ),
            per_tile_multiplier: PER_TILE_MULTIPLIER,
            per_tile_floor: PER_TILE_FLOOR,
            per_tile_ceiling: PER_TILE_CEILING,
        }
    }
}

/// Settings for the gate deriver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Population used when none is given
    pub default_population: f64,

    /// Gates selected by population
    pub bands: TierTable<Gates>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            default_population: DEFAULT_POPULATION,
            bands: TierTable::new(
                BASELINE_GATES,
                vec![
                    Tier::above(LARGE_CITY_POPULATION, LARGE_CITY_GATES),
                    Tier::below(SMALL_CITY_POPULATION, SMALL_CITY_GATES),
                ],
            ),
        }
    }
}

/// Fixed relaxation applied to gates of thin categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThinCategoryRelaxation {
    /// Subtracted from `min_rating`
    pub rating_delta: f64,

    /// Subtracted from `min_reviews`
    pub review_delta: u32,

    /// `min_reviews` never goes below this
    pub review_floor: u32,
}

impl Default for ThinCategoryRelaxation {
    fn default() -> Self {
        Self {
            rating_delta: THIN_RATING_RELAXATION,
            review_delta: THIN_REVIEW_RELAXATION,
            review_floor: MIN_REVIEWS_FLOOR,
        }
    }
}

impl BudgetConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BudgetError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded budget configuration");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, BudgetError> {
        let config: BudgetConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the derivation cannot work with
    pub fn validate(&self) -> Result<(), BudgetError> {
        let capacity = &self.capacity;

        if !capacity.default_population.is_finite() || capacity.default_population < 0.0 {
            return Err(BudgetError::Config(format!(
                "capacity.default_population must be a non-negative number, got {}",
                capacity.default_population
            )));
        }
        if !capacity.default_radius_meters.is_finite() || capacity.default_radius_meters <= 0.0 {
            return Err(BudgetError::Config(format!(
                "capacity.default_radius_meters must be positive, got {}",
                capacity.default_radius_meters
            )));
        }
        if capacity.default_grid_rows == 0 || capacity.default_grid_cols == 0 {
            return Err(BudgetError::Config(
                "capacity default grid dimensions must be at least 1".to_string(),
            ));
        }
        if !capacity.per_tile_multiplier.is_finite() || capacity.per_tile_multiplier < 0.0 {
            return Err(BudgetError::Config(format!(
                "capacity.per_tile_multiplier must be a non-negative number, got {}",
                capacity.per_tile_multiplier
            )));
        }
        if capacity.per_tile_floor > capacity.per_tile_ceiling {
            return Err(BudgetError::Config(format!(
                "capacity.per_tile_floor ({}) exceeds per_tile_ceiling ({})",
                capacity.per_tile_floor, capacity.per_tile_ceiling
            )));
        }

        let densities = std::iter::once(&capacity.density.baseline)
            .chain(capacity.density.tiers.iter().map(|tier| &tier.value));
        for density in densities {
            if !density.is_finite() || *density < 0.0 {
                return Err(BudgetError::Config(format!(
                    "capacity.density values must be non-negative numbers, got {}",
                    density
                )));
            }
        }
        validate_thresholds("capacity.density", &capacity.density)?;

        if !self.gates.default_population.is_finite() || self.gates.default_population < 0.0 {
            return Err(BudgetError::Config(format!(
                "gates.default_population must be a non-negative number, got {}",
                self.gates.default_population
            )));
        }
        let bands = std::iter::once(&self.gates.bands.baseline)
            .chain(self.gates.bands.tiers.iter().map(|tier| &tier.value));
        for gates in bands {
            if !gates.min_rating.is_finite() {
                return Err(BudgetError::Config(format!(
                    "gates.bands min_rating must be finite, got {}",
                    gates.min_rating
                )));
            }
        }
        validate_thresholds("gates.bands", &self.gates.bands)?;

        if !self.thin.rating_delta.is_finite() || self.thin.rating_delta < 0.0 {
            return Err(BudgetError::Config(format!(
                "thin.rating_delta must be a non-negative number, got {}",
                self.thin.rating_delta
            )));
        }

        Ok(())
    }
}

/// Thresholds must be finite, `above` bounds strictly ascending and `below`
/// bounds strictly descending, so the last match is the most extreme one.
fn validate_thresholds<T>(section: &str, table: &TierTable<T>) -> Result<(), BudgetError> {
    let mut last_above: Option<f64> = None;
    let mut last_below: Option<f64> = None;

    for tier in &table.tiers {
        let bound = tier.threshold.bound();
        if !bound.is_finite() {
            return Err(BudgetError::Config(format!(
                "{} thresholds must be finite, got {}",
                section, bound
            )));
        }

        match tier.threshold {
            Threshold::Above(bound) => {
                if let Some(previous) = last_above.filter(|previous| bound <= *previous) {
                    return Err(BudgetError::Config(format!(
                        "{} above thresholds must be strictly ascending, got {} after {}",
                        section, bound, previous
                    )));
                }
                last_above = Some(bound);
            }
            Threshold::Below(bound) => {
                if let Some(previous) = last_below.filter(|previous| bound >= *previous) {
                    return Err(BudgetError::Config(format!(
                        "{} below thresholds must be strictly descending, got {} after {}",
                        section, bound, previous
                    )));
                }
                last_below = Some(bound);
            }
        }
    }
    Ok(())
}
