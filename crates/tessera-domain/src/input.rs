//! Onboarding input - raw city signals captured at city setup

use serde::{Deserialize, Serialize};

/// Raw signals describing a city, as captured by the onboarding flow.
///
/// Every field is optional. Absent values are replaced by the deriver's
/// configured defaults (population 2,000,000; radius 8000 m; 3x3 grid).
/// Values are not sanitized here: negative or zero inputs pass through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingInput {
    /// City population
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<f64>,

    /// Search radius around the city center, in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<f64>,

    /// Number of grid rows laid over the search radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_rows: Option<u32>,

    /// Number of grid columns laid over the search radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_cols: Option<u32>,
}

impl OnboardingInput {
    /// An input with every field left to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population
    pub fn with_population(mut self, population: f64) -> Self {
        self.population = Some(population);
        self
    }

    /// Set the search radius in meters
    pub fn with_radius_meters(mut self, radius_meters: f64) -> Self {
        self.radius_meters = Some(radius_meters);
        self
    }

    /// Set both grid dimensions
    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.grid_rows = Some(rows);
        self.grid_cols = Some(cols);
        self
    }
}
