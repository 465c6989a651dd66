//! Venue caps - ingestion volume limits for a city

use serde::{Deserialize, Serialize};

/// Upper bounds on how many venues may be ingested for a city.
///
/// `max_count` bounds the whole city; `per_tile_max` bounds a single grid
/// tile. Produced fresh by the capacity deriver and never persisted by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VenueCaps {
    /// Total venue target for the city
    pub max_count: u64,

    /// Maximum venues pulled from any single tile
    pub per_tile_max: u32,
}
