//! Sustainability report assembly — a downstream consumer of a finished
//! `PackagingPlan`. Projections here are reporting conveniences layered on
//! the engine's output; the engine itself stays pure.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::plan::PackagingPlan;
use crate::models::product::ProductSpec;

/// Trees saved per kg of board not produced.
const TREES_PER_KG: f64 = 0.05;

/// Litres of process water saved per kg of board not produced.
const WATER_LITERS_PER_KG: f64 = 15.0;

/// Unit volume assumed for the annual projection.
const PROJECTED_ANNUAL_UNITS: u32 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    pub product: ProductSpec,
    pub plan: PackagingPlan,
    /// Estimated board mass saved per unit, if the caller has one. Tree and
    /// water figures are zero without it.
    #[serde(default)]
    pub material_saved_kg: f64,
    /// Per-unit cost saving in the caller's currency, if known.
    #[serde(default)]
    pub cost_saving_per_unit: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentalImpact {
    pub co2_reduction_pct: f64,
    pub volume_reduction_pct: f64,
    pub material_saved_kg: f64,
    pub trees_saved: f64,
    pub water_saved_liters: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EconomicImpact {
    pub cost_saving_pct: f64,
    pub cost_saving_per_unit: f64,
    pub projected_annual_units: u32,
    pub projected_annual_savings: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SustainabilityReport {
    pub report_id: String,
    pub generated_at: DateTime<Utc>,
    pub product: ProductSpec,
    pub optimization: PackagingPlan,
    pub environmental_impact: EnvironmentalImpact,
    pub economic_impact: EconomicImpact,
}

/// POST /api/v1/report
pub async fn handle_report(
    Json(req): Json<ReportRequest>,
) -> Result<Json<SustainabilityReport>, AppError> {
    Ok(Json(build_report(req, Utc::now())))
}

/// Assembles the report at a given instant. The timestamp is injected so the
/// assembly itself stays deterministic and testable.
pub fn build_report(req: ReportRequest, now: DateTime<Utc>) -> SustainabilityReport {
    let report_id = format!("REPORT-{}", now.format("%Y%m%d-%H%M%S"));

    let environmental_impact = EnvironmentalImpact {
        co2_reduction_pct: req.plan.co2_reduction_pct,
        volume_reduction_pct: req.plan.volume_reduction_pct,
        material_saved_kg: req.material_saved_kg,
        trees_saved: round2(req.material_saved_kg * TREES_PER_KG),
        water_saved_liters: round2(req.material_saved_kg * WATER_LITERS_PER_KG),
    };

    let economic_impact = EconomicImpact {
        cost_saving_pct: req.plan.cost_saving_pct,
        cost_saving_per_unit: req.cost_saving_per_unit,
        projected_annual_units: PROJECTED_ANNUAL_UNITS,
        projected_annual_savings: round2(
            req.cost_saving_per_unit * f64::from(PROJECTED_ANNUAL_UNITS),
        ),
    };

    SustainabilityReport {
        report_id,
        generated_at: now,
        product: req.product,
        optimization: req.plan,
        environmental_impact,
        economic_impact,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
