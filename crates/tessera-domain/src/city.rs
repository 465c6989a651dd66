//! City records - onboarded cities and their persisted overrides

use crate::{Gates, OnboardingInput, VenueCaps};
use serde::{Deserialize, Serialize};

/// Explicit per-city values that replace computed defaults.
///
/// Each field overrides independently. Stored by whichever system owns the
/// city records; Tessera only reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CityOverrides {
    /// Replaces the computed total venue cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u64>,

    /// Replaces the computed per-tile cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_tile_max: Option<u32>,

    /// Replaces the computed minimum rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,

    /// Replaces the computed minimum review count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_reviews: Option<u32>,
}

impl CityOverrides {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.max_count.is_none()
            && self.per_tile_max.is_none()
            && self.min_rating.is_none()
            && self.min_reviews.is_none()
    }

    /// True when any cap field is set
    pub fn touches_caps(&self) -> bool {
        self.max_count.is_some() || self.per_tile_max.is_some()
    }

    /// True when any gate field is set
    pub fn touches_gates(&self) -> bool {
        self.min_rating.is_some() || self.min_reviews.is_some()
    }

    /// Apply cap overrides on top of computed caps
    pub fn apply_to_caps(&self, computed: VenueCaps) -> VenueCaps {
        VenueCaps {
            max_count: self.max_count.unwrap_or(computed.max_count),
            per_tile_max: self.per_tile_max.unwrap_or(computed.per_tile_max),
        }
    }

    /// Apply gate overrides on top of computed gates
    pub fn apply_to_gates(&self, computed: Gates) -> Gates {
        Gates {
            min_rating: self.min_rating.unwrap_or(computed.min_rating),
            min_reviews: self.min_reviews.unwrap_or(computed.min_reviews),
        }
    }
}

/// An onboarded city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Stable identifier, e.g. `lisbon`
    pub slug: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Population captured at onboarding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<f64>,

    /// Search radius in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<f64>,

    /// Grid rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_rows: Option<u32>,

    /// Grid columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_cols: Option<u32>,

    /// Persisted overrides
    #[serde(default, skip_serializing_if = "CityOverrides::is_empty")]
    pub overrides: CityOverrides,
}

impl CityRecord {
    /// Create a record with only a slug and name
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            population: None,
            radius_meters: None,
            grid_rows: None,
            grid_cols: None,
            overrides: CityOverrides::default(),
        }
    }

    /// The onboarding signals stored on this record
    pub fn input(&self) -> OnboardingInput {
        OnboardingInput {
            population: self.population,
            radius_meters: self.radius_meters,
            grid_rows: self.grid_rows,
            grid_cols: self.grid_cols,
        }
    }
}
