// Packaging-parameter derivation engine.
// Implements: input validation, dimension optimization, material selection,
// savings estimation, structural scoring.
// Pure and synchronous — no I/O, no clock, no randomness. The HTTP layer is
// the only async boundary; concurrent invocations are trivially safe.

pub mod dimensions;
pub mod handlers;
pub mod materials;
pub mod scoring;
pub mod validate;

use crate::errors::AppError;
use crate::models::plan::PackagingPlan;
use crate::models::product::ProductSpec;

/// Rounds a percentage to one decimal place for reporting.
pub(crate) fn round_pct(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Derives a full `PackagingPlan` from a validated `ProductSpec`.
///
/// Deterministic: identical specs yield structurally identical plans. The
/// only failure mode is `AppError::Computation` on a broken volume
/// invariant, which cannot occur for a spec that passed validation.
pub fn optimize(spec: &ProductSpec) -> Result<PackagingPlan, AppError> {
    let dims = dimensions::optimize_dimensions(spec)?;
    let material = materials::recommend_material(spec);
    let (cost_saving_pct, co2_reduction_pct) = scoring::savings(dims.volume_reduction_pct);
    let structural_scores = scoring::structural_scores(spec);

    Ok(PackagingPlan {
        optimized_dimensions: dims.optimized,
        dimension_delta: dims.delta,
        material,
        volume_reduction_pct: round_pct(dims.volume_reduction_pct),
        cost_saving_pct,
        co2_reduction_pct,
        structural_scores,
    })
}
