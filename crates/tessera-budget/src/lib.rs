//! Tessera Budget
//!
//! Derives per-city ingestion budgets for place-data ingestion jobs.
//!
//! The budget module provides:
//! - Venue caps (total target and per-tile pull limit) from population,
//!   search radius and grid resolution
//! - Baseline admission gates (minimum rating and review count) from population
//! - Thin-category classification and gate relaxation
//! - A planner that layers persisted city overrides over computed defaults
//!
//! The four derivation functions are pure: they read only their arguments
//! and fixed constants, never fail, and never log.
//!
//! # Examples
//!
//! ```
//! use tessera_budget::{
//!     adjust_gates_for_thin_category, derive_base_gates_for_city, derive_venue_caps,
//!     is_thin_category,
//! };
//! use tessera_domain::OnboardingInput;
//!
//! let caps = derive_venue_caps(&OnboardingInput::default());
//! assert_eq!(caps.max_count, 4021);
//! assert_eq!(caps.per_tile_max, 120);
//!
//! let mut gates = derive_base_gates_for_city(Some(9_000_000.0));
//! assert_eq!(gates.min_reviews, 6);
//!
//! if is_thin_category("tours") {
//!     gates = adjust_gates_for_thin_category(gates);
//! }
//! assert_eq!(gates.min_reviews, 5);
//! ```
//!
//! # Configuration
//!
//! Every constant can be overridden from TOML. Omitted sections keep their
//! defaults:
//!
//! ```toml
//! [capacity]
//! default_radius_meters = 10000.0
//! per_tile_multiplier = 2.5
//! per_tile_floor = 25
//! per_tile_ceiling = 120
//!
//! [capacity.density]
//! baseline = 20.0
//! tiers = [
//!     { threshold = { above = 3000000.0 }, value = 30.0 },
//!     { threshold = { above = 8000000.0 }, value = 40.0 },
//! ]
//!
//! [thin]
//! rating_delta = 0.2
//! review_delta = 1
//! review_floor = 1
//! ```

#![warn(missing_docs)]

mod capacity;
mod config;
mod error;
mod gates;
mod planner;

pub use capacity::{derive_venue_caps, derive_venue_caps_with};
pub use config::{
    BudgetConfig, CapacityConfig, GateConfig, ThinCategoryRelaxation, BASELINE_DENSITY_PER_KM2,
    BASELINE_GATES, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_POPULATION,
    DEFAULT_RADIUS_METERS, LARGE_CITY_GATES, LARGE_CITY_POPULATION, MEGACITY_DENSITY_PER_KM2,
    MEGACITY_POPULATION, METRO_DENSITY_PER_KM2, METRO_POPULATION, MIN_REVIEWS_FLOOR,
    PER_TILE_CEILING, PER_TILE_FLOOR, PER_TILE_MULTIPLIER, SMALL_CITY_GATES,
    SMALL_CITY_POPULATION, THIN_RATING_RELAXATION, THIN_REVIEW_RELAXATION,
};
pub use error::BudgetError;
pub use gates::{
    adjust_gates_for_thin_category, adjust_gates_with, derive_base_gates_for_city,
    derive_base_gates_with,
};
pub use planner::{BudgetPlanner, BudgetSource, CategoryGates, CityBudget};
pub use tessera_domain::{is_thin_category, THIN_CATEGORIES};
