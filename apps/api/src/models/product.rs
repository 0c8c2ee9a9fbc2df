use serde::{Deserialize, Serialize};

/// Recognized product categories. Unrecognized values are rejected at
/// validation time, never silently mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electronics,
    FragileGoods,
    Food,
    Cosmetics,
    Apparel,
    Books,
    Toys,
    General,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Electronics,
        Category::FragileGoods,
        Category::Food,
        Category::Cosmetics,
        Category::Apparel,
        Category::Books,
        Category::Toys,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::FragileGoods => "fragile-goods",
            Category::Food => "food",
            Category::Cosmetics => "cosmetics",
            Category::Apparel => "apparel",
            Category::Books => "books",
            Category::Toys => "toys",
            Category::General => "general",
        }
    }

    /// Case-insensitive lookup; returns `None` for anything outside the set.
    pub fn parse(s: &str) -> Option<Category> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
    }
}

/// A validated product specification. Constructed only by the input
/// validator; all invariants (positive dimensions, fragility 1–5, known
/// category) hold by the time a value of this type exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    /// Length in cm, strictly positive.
    pub length: f64,
    /// Width in cm, strictly positive.
    pub width: f64,
    /// Height in cm, strictly positive.
    pub height: f64,
    /// Weight in kg, non-negative.
    pub weight: f64,
    pub category: Category,
    /// Ordinal 1 ("Very Low") to 5 ("Very High").
    pub fragility: u8,
    pub stackable: bool,
    pub recyclable: bool,
}
