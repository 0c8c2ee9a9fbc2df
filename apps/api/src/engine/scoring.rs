//! Savings estimation and structural scoring.
//!
//! Every number here is a deterministic rule-table heuristic, not a physical
//! simulation or a learned model, and the API documents it as such. The
//! constants are isolated here so a future structural model can replace them
//! without touching call sites.

use crate::engine::round_pct;
use crate::models::plan::StructuralScores;
use crate::models::product::ProductSpec;

/// Cost saving as a fraction of volume reduction.
pub const COST_FACTOR: f64 = 0.8;

/// CO₂ reduction as a fraction of volume reduction.
pub const CO2_FACTOR: f64 = 1.2;

/// Fragility level at or above which the stronger construction is assumed.
const HIGH_FRAGILITY_MIN: u8 = 4;

const STRENGTH_REINFORCED: u8 = 95;
const STRENGTH_STANDARD: u8 = 85;

// Placeholder pending a real structural model.
const DURABILITY_SCORE: u8 = 92;

const SUSTAINABILITY_RECYCLABLE: u8 = 98;
const SUSTAINABILITY_STANDARD: u8 = 85;

/// Derives cost-saving and CO₂-reduction percentages from the unrounded
/// volume reduction. Each is rounded to one decimal independently.
pub fn savings(volume_reduction_pct: f64) -> (f64, f64) {
    (
        round_pct(volume_reduction_pct * COST_FACTOR),
        round_pct(volume_reduction_pct * CO2_FACTOR),
    )
}

/// Assigns the structural-quality score set for a validated spec.
pub fn structural_scores(spec: &ProductSpec) -> StructuralScores {
    let strength = if spec.fragility >= HIGH_FRAGILITY_MIN {
        STRENGTH_REINFORCED
    } else {
        STRENGTH_STANDARD
    };

    let sustainability = if spec.recyclable {
        SUSTAINABILITY_RECYCLABLE
    } else {
        SUSTAINABILITY_STANDARD
    };

    StructuralScores {
        strength,
        durability: DURABILITY_SCORE,
        sustainability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Category;

    fn spec(fragility: u8, recyclable: bool) -> ProductSpec {
        ProductSpec {
            name: "widget".to_string(),
            length: 10.0,
            width: 10.0,
            height: 10.0,
            weight: 1.0,
            category: Category::General,
            fragility,
            stackable: false,
            recyclable,
        }
    }

    #[test]
    fn test_savings_factors_applied_before_rounding() {
        // 41.76 * 1.2 = 50.112 → 50.1 (not 41.8 * 1.2 = 50.16 → 50.2)
        let (cost, co2) = savings(41.76);
        assert_eq!(cost, 33.4);
        assert_eq!(co2, 50.1);
    }

    #[test]
    fn test_savings_of_zero_reduction() {
        assert_eq!(savings(0.0), (0.0, 0.0));
    }

    #[test]
    fn test_negative_reduction_propagates() {
        let (cost, co2) = savings(-10.0);
        assert_eq!(cost, -8.0);
        assert_eq!(co2, -12.0);
    }

    #[test]
    fn test_strength_threshold_at_fragility_4() {
        assert_eq!(structural_scores(&spec(3, false)).strength, 85);
        assert_eq!(structural_scores(&spec(4, false)).strength, 95);
        assert_eq!(structural_scores(&spec(5, false)).strength, 95);
    }

    #[test]
    fn test_durability_is_constant() {
        for fragility in 1u8..=5 {
            assert_eq!(structural_scores(&spec(fragility, true)).durability, 92);
        }
    }

    #[test]
    fn test_sustainability_tracks_recyclability() {
        assert_eq!(structural_scores(&spec(2, true)).sustainability, 98);
        assert_eq!(structural_scores(&spec(2, false)).sustainability, 85);
    }

    #[test]
    fn test_scores_within_percentage_bounds() {
        for fragility in 1u8..=5 {
            for &recyclable in &[true, false] {
                let s = structural_scores(&spec(fragility, recyclable));
                assert!(s.strength <= 100);
                assert!(s.durability <= 100);
                assert!(s.sustainability <= 100);
            }
        }
    }
}
