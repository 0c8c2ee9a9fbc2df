//! Input validation — the only way to obtain a `ProductSpec`.
//!
//! Validation is all-or-nothing per request: the first violated rule fails
//! the whole request with a field-naming error, and no partially validated
//! object ever escapes. Nothing is clamped; out-of-range values are rejected.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::product::{Category, ProductSpec};

/// The raw, untrusted request shape. Every field is optional at the wire
/// level so that a missing field produces a precise error instead of a
/// generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptimizeRequest {
    pub name: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub category: Option<String>,
    pub fragility: Option<f64>,
    pub stackable: Option<bool>,
    pub recyclable: Option<bool>,
}

const DEFAULT_FRAGILITY: u8 = 3;

/// Validates a raw request into a `ProductSpec`, or fails with the first
/// field-level violation.
pub fn validate(req: &OptimizeRequest) -> Result<ProductSpec, AppError> {
    let name = req
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::validation("name", "must be a non-empty product name"))?
        .to_string();

    let length = require_positive_dimension("length", req.length)?;
    let width = require_positive_dimension("width", req.width)?;
    let height = require_positive_dimension("height", req.height)?;

    let weight = require_finite("weight", req.weight)?;
    if weight < 0.0 {
        return Err(AppError::validation("weight", "must be zero or greater"));
    }

    let category_raw = req
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::validation("category", "is required"))?;
    let category = Category::parse(category_raw)
        .ok_or_else(|| AppError::UnknownCategory(category_raw.to_string()))?;

    let fragility = match req.fragility {
        None => DEFAULT_FRAGILITY,
        Some(f) => {
            if !f.is_finite() || f.fract() != 0.0 {
                return Err(AppError::validation("fragility", "must be an integer"));
            }
            if !(1.0..=5.0).contains(&f) {
                return Err(AppError::validation(
                    "fragility",
                    "must be between 1 (Very Low) and 5 (Very High)",
                ));
            }
            f as u8
        }
    };

    Ok(ProductSpec {
        name,
        length,
        width,
        height,
        weight,
        category,
        fragility,
        stackable: req.stackable.unwrap_or(false),
        recyclable: req.recyclable.unwrap_or(true),
    })
}

fn require_finite(field: &str, value: Option<f64>) -> Result<f64, AppError> {
    let v = value.ok_or_else(|| AppError::validation(field, "is required"))?;
    if !v.is_finite() {
        return Err(AppError::validation(field, "must be a finite number"));
    }
    Ok(v)
}

fn require_positive_dimension(field: &str, value: Option<f64>) -> Result<f64, AppError> {
    let v = require_finite(field, value)?;
    if v <= 0.0 {
        return Err(AppError::validation(
            field,
            "must be greater than zero (cm)",
        ));
    }
    Ok(v)
}
