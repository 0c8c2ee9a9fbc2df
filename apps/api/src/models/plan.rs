use serde::{Deserialize, Serialize};

/// Outer box dimensions in cm. Also used for the signed per-dimension delta
/// against the generic-padding baseline, where negative values mean the
/// fragility padding exceeded the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// A packaging material recommendation from the fixed rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub thickness_mm: u8,
}

/// Structural quality scores, each an integer in [0, 100].
///
/// These are rule-table heuristics, not measurements: `durability` is a
/// constant placeholder and `strength` is a two-level function of fragility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralScores {
    pub strength: u8,
    pub durability: u8,
    pub sustainability: u8,
}

/// The full derivation result for one product. Produced fresh per request;
/// two identical specs always yield structurally equal plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingPlan {
    pub optimized_dimensions: Dimensions,
    /// Baseline padded dimension minus optimized dimension, per axis.
    /// Positive = material saved against typical unoptimized practice.
    pub dimension_delta: Dimensions,
    pub material: Material,
    pub volume_reduction_pct: f64,
    pub cost_saving_pct: f64,
    pub co2_reduction_pct: f64,
    pub structural_scores: StructuralScores,
}
