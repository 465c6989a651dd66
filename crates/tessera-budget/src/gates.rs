//! Gate deriver and thin-category adjuster

use crate::{GateConfig, ThinCategoryRelaxation};
use tessera_domain::Gates;

/// Derive baseline admission gates from population using the default bands.
///
/// - above 8,000,000: `{4.1, 6}`
/// - below 1,000,000: `{3.8, 2}`
/// - otherwise: `{4.0, 4}`
///
/// An absent population is treated as 2,000,000.
pub fn derive_base_gates_for_city(population: Option<f64>) -> Gates {
    derive_base_gates_with(&GateConfig::default(), population)
}

/// Derive baseline gates against an explicit configuration
pub fn derive_base_gates_with(config: &GateConfig, population: Option<f64>) -> Gates {
    let population = population.unwrap_or(config.default_population);
    *config.bands.select(population)
}

/// Relax gates for a thin category using the default relaxation.
///
/// Lowers `min_rating` by 0.2 and `min_reviews` by 1, never below 1 review.
pub fn adjust_gates_for_thin_category(gates: Gates) -> Gates {
    adjust_gates_with(&ThinCategoryRelaxation::default(), gates)
}

/// Relax gates against an explicit relaxation
pub fn adjust_gates_with(relaxation: &ThinCategoryRelaxation, gates: Gates) -> Gates {
    Gates {
        min_rating: gates.min_rating - relaxation.rating_delta,
        min_reviews: gates
            .min_reviews
            .saturating_sub(relaxation.review_delta)
            .max(relaxation.review_floor),
    }
}
