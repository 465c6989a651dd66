//! Capacity deriver
//!
//! Total capacity scales with city area times a population-tiered density.
//! The per-tile cap is a multiple of the spatial average so dense tiles can
//! absorb more venues than sparse ones, clamped so neither rural nor
//! megacity inputs produce degenerate caps.

use crate::CapacityConfig;
use std::f64::consts::PI;
use tessera_domain::{OnboardingInput, VenueCaps};

/// Derive venue caps using the default constants.
///
/// Never fails. Absent inputs fall back to population 2,000,000, radius
/// 8000 m and a 3x3 grid.
pub fn derive_venue_caps(input: &OnboardingInput) -> VenueCaps {
    derive_venue_caps_with(&CapacityConfig::default(), input)
}

/// Derive venue caps against an explicit configuration
pub fn derive_venue_caps_with(config: &CapacityConfig, input: &OnboardingInput) -> VenueCaps {
    let population = input.population.unwrap_or(config.default_population);
    let radius_km = input.radius_meters.unwrap_or(config.default_radius_meters) / 1000.0;
    let area_km2 = PI * radius_km * radius_km;

    let density = *config.density.select(population);
    // Saturating cast: negative or NaN products become 0.
    let max_count = (density * area_km2).round() as u64;

    let rows = input.grid_rows.unwrap_or(config.default_grid_rows);
    let cols = input.grid_cols.unwrap_or(config.default_grid_cols);
    let tiles = f64::from(rows) * f64::from(cols);
    let avg_per_tile = max_count as f64 / tiles;

    let per_tile_max = clamp_per_tile(
        avg_per_tile * config.per_tile_multiplier,
        config.per_tile_floor,
        config.per_tile_ceiling,
    );

    VenueCaps {
        max_count,
        per_tile_max,
    }
}

/// Clamp then round. A zero grid gives +inf (ceiling) or NaN for 0/0 (floor).
fn clamp_per_tile(raw: f64, floor: u32, ceiling: u32) -> u32 {
    raw.max(f64::from(floor)).min(f64::from(ceiling)).round() as u32
}
