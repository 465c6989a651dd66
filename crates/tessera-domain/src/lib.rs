//! Tessera Domain Layer
//!
//! Value types shared by every Tessera crate. This crate holds no I/O and no
//! derivation logic; it only defines what the ingestion budget vocabulary
//! looks like.
//!
//! ## Key Concepts
//!
//! - **Onboarding input**: raw city signals (population, radius, grid)
//! - **Venue caps**: total and per-tile ingestion limits
//! - **Gates**: minimum rating and review count for admitting a venue
//! - **Thin category**: a category expected to be sparse in most cities
//! - **Tier table**: ordered `(threshold, value)` pairs, last match wins
//! - **City record**: an onboarded city with optional persisted overrides

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod caps;
pub mod category;
pub mod city;
pub mod gates;
pub mod input;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use caps::VenueCaps;
pub use category::{is_thin_category, THIN_CATEGORIES};
pub use city::{CityOverrides, CityRecord};
pub use gates::Gates;
pub use input::OnboardingInput;
pub use tier::{Threshold, Tier, TierTable};
