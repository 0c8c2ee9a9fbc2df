//! Dimension optimization — protective padding and resulting outer box size.
//!
//! Padding grows linearly with the ordinal fragility scale (2cm per level).
//! Savings are reported against a fixed +10cm generic-padding baseline that
//! represents typical unoptimized practice; the baseline is a reference for
//! comparison, never an optimization target.

use crate::errors::AppError;
use crate::models::plan::Dimensions;
use crate::models::product::ProductSpec;

/// Protective padding per fragility level, in cm.
pub const PADDING_PER_FRAGILITY_CM: f64 = 2.0;

/// Fixed padding of the unoptimized status-quo box, in cm.
pub const BASELINE_PADDING_CM: f64 = 10.0;

/// Result of the dimension pass. `volume_reduction_pct` is unrounded here so
/// the savings factors downstream apply to the exact value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionPlan {
    pub optimized: Dimensions,
    pub delta: Dimensions,
    pub volume_reduction_pct: f64,
}

/// Computes the optimized outer dimensions and the savings against the
/// generic baseline.
///
/// Each optimized dimension is `ceil(raw + fragility * 2)` — an integer-cm
/// value that is manufacturable and never smaller than the padded
/// requirement. The per-axis delta may be negative when fragility padding
/// exceeds the generic baseline; that is a reportable outcome, not an error.
pub fn optimize_dimensions(spec: &ProductSpec) -> Result<DimensionPlan, AppError> {
    let padding = f64::from(spec.fragility) * PADDING_PER_FRAGILITY_CM;

    let optimized = Dimensions {
        length: (spec.length + padding).ceil(),
        width: (spec.width + padding).ceil(),
        height: (spec.height + padding).ceil(),
    };

    let baseline = Dimensions {
        length: spec.length + BASELINE_PADDING_CM,
        width: spec.width + BASELINE_PADDING_CM,
        height: spec.height + BASELINE_PADDING_CM,
    };

    let delta = Dimensions {
        length: baseline.length - optimized.length,
        width: baseline.width - optimized.width,
        height: baseline.height - optimized.height,
    };

    let baseline_volume = baseline.volume();
    // Unreachable for a validated spec (all raw dimensions > 0), but a zero
    // baseline would make the reduction undefined, so fail loudly instead of
    // dividing by zero.
    if baseline_volume <= 0.0 {
        return Err(AppError::Computation(format!(
            "baseline volume is {baseline_volume}, expected > 0"
        )));
    }

    let volume_reduction_pct =
        (baseline_volume - optimized.volume()) / baseline_volume * 100.0;

    Ok(DimensionPlan {
        optimized,
        delta,
        volume_reduction_pct,
    })
}
