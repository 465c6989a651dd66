//! Trait definitions for external interactions
//!
//! City records are owned by an external system. Infrastructure crates
//! implement these traits to feed records into Tessera.

use crate::CityRecord;

/// Trait for loading the list of onboarded cities
///
/// Implemented by the infrastructure layer (tessera-cities)
pub trait CitySource {
    /// Error type for load operations
    type Error;

    /// Load every onboarded city
    fn load_cities(&self) -> Result<Vec<CityRecord>, Self::Error>;
}
