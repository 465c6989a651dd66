//! Gates - minimum quality thresholds for venue admission

use serde::{Deserialize, Serialize};

/// Minimum rating and review count a candidate venue must meet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gates {
    /// Minimum average rating
    pub min_rating: f64,

    /// Minimum number of reviews
    pub min_reviews: u32,
}

impl Gates {
    /// Create gates from explicit thresholds
    pub fn new(min_rating: f64, min_reviews: u32) -> Self {
        Self {
            min_rating,
            min_reviews,
        }
    }

    /// Check whether a candidate venue passes both thresholds.
    ///
    /// Candidates with no rating or no review count are never admitted.
    pub fn admits(&self, rating: Option<f64>, review_count: Option<u32>) -> bool {
        match (rating, review_count) {
            (Some(rating), Some(reviews)) => {
                rating >= self.min_rating && reviews >= self.min_reviews
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_on_threshold() {
        let gates = Gates::new(4.0, 4);
        assert!(gates.admits(Some(4.0), Some(4)));
        assert!(gates.admits(Some(4.7), Some(120)));
    }

    #[test]
    fn test_rejects_below_threshold() {
        let gates = Gates::new(4.0, 4);
        assert!(!gates.admits(Some(3.9), Some(50)));
        assert!(!gates.admits(Some(4.5), Some(3)));
    }

    #[test]
    fn test_rejects_missing_signals() {
        let gates = Gates::new(0.0, 0);
        assert!(!gates.admits(None, Some(10)));
        assert!(!gates.admits(Some(4.2), None));
    }
}
