//! Tier tables - ordered threshold selection
//!
//! A tier table starts from a baseline value and walks an ordered list of
//! `(threshold, value)` pairs. Every tier whose threshold matches replaces
//! the current selection, so the last matching tier in list order wins.
//! Tables are written in ascending threshold order, which makes the highest
//! satisfied threshold the winner.

use serde::{Deserialize, Serialize};

/// Strict comparison against a population-like quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    /// Matches values strictly greater than the bound
    Above(f64),

    /// Matches values strictly less than the bound
    Below(f64),
}

impl Threshold {
    /// Check whether a value satisfies this threshold
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Threshold::Above(bound) => value > bound,
            Threshold::Below(bound) => value < bound,
        }
    }

    /// The bound being compared against
    pub fn bound(&self) -> f64 {
        match *self {
            Threshold::Above(bound) | Threshold::Below(bound) => bound,
        }
    }
}

/// One entry of a tier table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier<T> {
    /// Condition under which this tier applies
    pub threshold: Threshold,

    /// Value selected when the condition holds
    pub value: T,
}

impl<T> Tier<T> {
    /// Tier applying strictly above `bound`
    pub fn above(bound: f64, value: T) -> Self {
        Self {
            threshold: Threshold::Above(bound),
            value,
        }
    }

    /// Tier applying strictly below `bound`
    pub fn below(bound: f64, value: T) -> Self {
        Self {
            threshold: Threshold::Below(bound),
            value,
        }
    }
}

/// Baseline value plus ordered overriding tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable<T> {
    /// Value used when no tier matches
    pub baseline: T,

    /// Tiers evaluated in order; later matches replace earlier ones
    #[serde(default = "Vec::new")]
    pub tiers: Vec<Tier<T>>,
}

impl<T> TierTable<T> {
    /// Create a table from a baseline and ordered tiers
    pub fn new(baseline: T, tiers: Vec<Tier<T>>) -> Self {
        Self { baseline, tiers }
    }

    /// Select the value for `input`
    pub fn select(&self, input: f64) -> &T {
        match self.position(input) {
            Some(idx) => &self.tiers[idx].value,
            None => &self.baseline,
        }
    }

    /// Index of the winning tier, `None` when the baseline applies
    pub fn position(&self, input: f64) -> Option<usize> {
        self.tiers
            .iter()
            .rposition(|tier| tier.threshold.matches(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn density_table() -> TierTable<f64> {
        TierTable::new(
            20.0,
            vec![Tier::above(3_000_000.0, 30.0), Tier::above(8_000_000.0, 40.0)],
        )
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!Threshold::Above(10.0).matches(10.0));
        assert!(Threshold::Above(10.0).matches(10.5));
        assert!(!Threshold::Below(10.0).matches(10.0));
        assert!(Threshold::Below(10.0).matches(9.5));
    }

    #[test]
    fn test_baseline_when_nothing_matches() {
        let table = density_table();
        assert_eq!(*table.select(2_000_000.0), 20.0);
        assert_eq!(*table.select(3_000_000.0), 20.0);
        assert_eq!(table.position(2_000_000.0), None);
    }

    #[test]
    fn test_highest_threshold_wins() {
        let table = density_table();
        assert_eq!(*table.select(3_000_001.0), 30.0);
        assert_eq!(*table.select(8_000_000.0), 30.0);
        assert_eq!(*table.select(8_000_001.0), 40.0);
        assert_eq!(table.position(9_000_000.0), Some(1));
    }

    #[test]
    fn test_mixed_directions() {
        let table = TierTable::new(
            "mid",
            vec![Tier::above(8_000_000.0, "large"), Tier::below(1_000_000.0, "small")],
        );
        assert_eq!(*table.select(9_000_000.0), "large");
        assert_eq!(*table.select(500_000.0), "small");
        assert_eq!(*table.select(1_000_000.0), "mid");
        assert_eq!(*table.select(8_000_000.0), "mid");
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{"baseline": 1, "tiers": [{"threshold": {"above": 5}, "value": 2}]}"#;
        let table: TierTable<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(table.tiers[0].threshold, Threshold::Above(5.0));
        assert_eq!(*table.select(6.0), 2);
    }

    proptest! {
        #[test]
        fn prop_density_is_monotonic(a in 0.0f64..2.0e7, b in 0.0f64..2.0e7) {
            let table = density_table();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(table.select(lo) <= table.select(hi));
        }

        #[test]
        fn prop_select_matches_position(x in -1.0e7f64..2.0e7) {
            let table = density_table();
            let expected = match table.position(x) {
                Some(idx) => table.tiers[idx].value,
                None => table.baseline,
            };
            prop_assert_eq!(*table.select(x), expected);
        }
    }
}
