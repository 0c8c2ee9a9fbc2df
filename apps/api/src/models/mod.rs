pub mod plan;
pub mod product;
