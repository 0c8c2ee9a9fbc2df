//! Material recommendation — a fixed priority cascade, evaluated top-down.
//!
//! First match wins; the ordering is a load-bearing contract. A heavy product
//! gets double-wall board even when it also qualifies for the electronics or
//! recyclable branches.

use serde::Serialize;

use crate::models::plan::Material;
use crate::models::product::{Category, ProductSpec};

/// Above this weight (kg) the product always gets double-wall board.
pub const HEAVY_WEIGHT_KG: f64 = 5.0;

/// Fragility level at or above which electronics get the foam-lined option.
pub const FRAGILE_ELECTRONICS_MIN: u8 = 4;

const DOUBLE_WALL_CORRUGATED: (&str, u8) = ("Double-Wall Corrugated Cardboard", 5);
const FOAM_LINED_RECYCLED: (&str, u8) = ("Recycled Cardboard with Biodegradable Foam", 4);
const RECYCLED_KRAFT_PAPER: (&str, u8) = ("100% Recycled Kraft Paper", 3);
const RECYCLED_CARDBOARD: (&str, u8) = ("Recycled Cardboard", 3);

fn material_from(entry: (&str, u8)) -> Material {
    Material {
        name: entry.0.to_string(),
        thickness_mm: entry.1,
    }
}

/// Selects the packaging material for a validated spec.
///
/// Total over the input space: exactly one branch fires for any spec.
pub fn recommend_material(spec: &ProductSpec) -> Material {
    if spec.weight > HEAVY_WEIGHT_KG {
        material_from(DOUBLE_WALL_CORRUGATED)
    } else if spec.category == Category::Electronics && spec.fragility >= FRAGILE_ELECTRONICS_MIN {
        material_from(FOAM_LINED_RECYCLED)
    } else if spec.recyclable {
        material_from(RECYCLED_KRAFT_PAPER)
    } else {
        material_from(RECYCLED_CARDBOARD)
    }
}

/// A catalog entry for the materials listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialInfo {
    pub name: String,
    pub thickness_mm: u8,
    pub recyclable: bool,
    pub biodegradable: bool,
    /// Human-readable description of when the cascade selects this material.
    pub selected_when: String,
}

/// The full material rule table, in cascade order.
pub fn material_catalog() -> Vec<MaterialInfo> {
    vec![
        MaterialInfo {
            name: DOUBLE_WALL_CORRUGATED.0.to_string(),
            thickness_mm: DOUBLE_WALL_CORRUGATED.1,
            recyclable: true,
            biodegradable: true,
            selected_when: format!("product weight exceeds {HEAVY_WEIGHT_KG}kg"),
        },
        MaterialInfo {
            name: FOAM_LINED_RECYCLED.0.to_string(),
            thickness_mm: FOAM_LINED_RECYCLED.1,
            recyclable: true,
            biodegradable: true,
            selected_when: format!(
                "electronics with fragility {FRAGILE_ELECTRONICS_MIN} or higher"
            ),
        },
        MaterialInfo {
            name: RECYCLED_KRAFT_PAPER.0.to_string(),
            thickness_mm: RECYCLED_KRAFT_PAPER.1,
            recyclable: true,
            biodegradable: true,
            selected_when: "recyclable products".to_string(),
        },
        MaterialInfo {
            name: RECYCLED_CARDBOARD.0.to_string(),
            thickness_mm: RECYCLED_CARDBOARD.1,
            recyclable: true,
            biodegradable: true,
            selected_when: "all remaining products".to_string(),
        },
    ]
}
