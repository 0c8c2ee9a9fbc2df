use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::materials::{material_catalog, MaterialInfo};
use crate::engine::optimize;
use crate::engine::validate::{validate, OptimizeRequest};
use crate::errors::AppError;
use crate::models::plan::PackagingPlan;
use crate::models::product::{Category, ProductSpec};

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub timestamp: DateTime<Utc>,
    pub product: ProductSpec,
    pub plan: PackagingPlan,
    pub recommendations: Vec<String>,
}

/// POST /api/v1/optimize
///
/// Validate input, invoke the engine, shape the response — three isolated
/// steps, no shared state between requests.
pub async fn handle_optimize(
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let product = validate(&req)?;
    info!("Processing optimization for: {}", product.name);

    let plan = optimize(&product)?;
    let recommendations = build_recommendations(&product, &plan);

    Ok(Json(OptimizeResponse {
        timestamp: Utc::now(),
        product,
        plan,
        recommendations,
    }))
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchOptimizeRequest {
    #[serde(default)]
    pub products: Vec<OptimizeRequest>,
}

/// Outcome for one product in a batch. A failed item carries the error in
/// its result entry instead of failing the whole batch.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItemResult {
    Success {
        name: String,
        plan: PackagingPlan,
    },
    Error {
        name: Option<String>,
        error: String,
    },
}

#[derive(Debug, Serialize)]
pub struct BatchOptimizeResponse {
    pub total_products: usize,
    pub successful: usize,
    pub results: Vec<BatchItemResult>,
}

/// POST /api/v1/batch-optimize
///
/// Validates and optimizes each product independently. Only an empty batch
/// is rejected outright.
pub async fn handle_batch_optimize(
    Json(req): Json<BatchOptimizeRequest>,
) -> Result<Json<BatchOptimizeResponse>, AppError> {
    if req.products.is_empty() {
        return Err(AppError::validation(
            "products",
            "must contain at least one product",
        ));
    }

    let mut results = Vec::with_capacity(req.products.len());
    let mut successful = 0;

    for item in &req.products {
        let outcome = validate(item).and_then(|product| {
            let plan = optimize(&product)?;
            Ok((product, plan))
        });
        match outcome {
            Ok((product, plan)) => {
                successful += 1;
                results.push(BatchItemResult::Success {
                    name: product.name,
                    plan,
                });
            }
            Err(err) => results.push(BatchItemResult::Error {
                name: item.name.clone(),
                error: err.to_string(),
            }),
        }
    }

    info!(
        "Batch optimization: {successful}/{} products succeeded",
        results.len()
    );

    Ok(Json(BatchOptimizeResponse {
        total_products: results.len(),
        successful,
        results,
    }))
}

#[derive(Serialize)]
pub struct MaterialsResponse {
    pub count: usize,
    pub materials: Vec<MaterialInfo>,
}

/// GET /api/v1/materials
pub async fn handle_materials() -> Json<MaterialsResponse> {
    let materials = material_catalog();
    Json(MaterialsResponse {
        count: materials.len(),
        materials,
    })
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
}

/// GET /api/v1/categories
pub async fn handle_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: Category::ALL.iter().map(Category::as_str).collect(),
    })
}

/// Builds the human-readable recommendation strings shown next to a plan.
fn build_recommendations(product: &ProductSpec, plan: &PackagingPlan) -> Vec<String> {
    let mut recommendations = vec![format!(
        "Use {} for optimal sustainability",
        plan.material.name
    )];

    if plan.volume_reduction_pct > 0.0 {
        recommendations.push(format!(
            "Reduce packaging volume by {:.1}%",
            plan.volume_reduction_pct
        ));
    }
    if product.stackable {
        recommendations.push("Consider stackable design for efficient storage".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> OptimizeRequest {
        OptimizeRequest {
            name: Some("Ceramic Vase".to_string()),
            length: Some(20.0),
            width: Some(15.0),
            height: Some(10.0),
            weight: Some(2.0),
            category: Some("general".to_string()),
            fragility: Some(3.0),
            stackable: Some(true),
            recyclable: Some(true),
        }
    }

    #[tokio::test]
    async fn test_optimize_happy_path() {
        let Json(resp) = handle_optimize(Json(request())).await.unwrap();
        assert_eq!(resp.product.name, "Ceramic Vase");
        assert_eq!(resp.plan.optimized_dimensions.length, 26.0);
        assert_eq!(resp.plan.volume_reduction_pct, 41.8);
        assert!(!resp.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_optimize_rejects_bad_input() {
        let mut req = request();
        req.fragility = Some(6.0);
        let err = handle_optimize(Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_batch_optimize_mixed_results() {
        let mut bad = request();
        bad.name = Some("Cracked Mug".to_string());
        bad.fragility = Some(6.0);
        let batch = BatchOptimizeRequest {
            products: vec![request(), bad],
        };

        let Json(resp) = handle_batch_optimize(Json(batch)).await.unwrap();
        assert_eq!(resp.total_products, 2);
        assert_eq!(resp.successful, 1);
        match &resp.results[0] {
            BatchItemResult::Success { name, plan } => {
                assert_eq!(name, "Ceramic Vase");
                assert_eq!(plan.optimized_dimensions.length, 26.0);
            }
            other => panic!("expected success entry, got {other:?}"),
        }
        match &resp.results[1] {
            BatchItemResult::Error { name, error } => {
                assert_eq!(name.as_deref(), Some("Cracked Mug"));
                assert!(error.contains("fragility"));
            }
            other => panic!("expected error entry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_batch_optimize_rejects_empty_batch() {
        let batch = BatchOptimizeRequest { products: vec![] };
        let err = handle_batch_optimize(Json(batch)).await.unwrap_err();
        match err {
            AppError::Validation { field, .. } => assert_eq!(field, "products"),
            other => panic!("expected a validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_materials_listing() {
        let Json(resp) = handle_materials().await;
        assert_eq!(resp.count, 4);
        assert_eq!(resp.materials.len(), 4);
    }

    #[tokio::test]
    async fn test_categories_listing_includes_known_set() {
        let Json(resp) = handle_categories().await;
        assert!(resp.categories.contains(&"electronics"));
        assert!(resp.categories.contains(&"fragile-goods"));
        assert!(resp.categories.contains(&"general"));
    }

    #[test]
    fn test_recommendations_mention_material_and_volume() {
        let product = validate(&request()).unwrap();
        let plan = optimize(&product).unwrap();
        let recs = build_recommendations(&product, &plan);
        assert!(recs[0].contains("100% Recycled Kraft Paper"));
        assert!(recs.iter().any(|r| r.contains("41.8%")));
        assert!(recs.iter().any(|r| r.contains("stackable")));
    }

    #[test]
    fn test_no_volume_recommendation_when_nothing_saved() {
        let mut req = request();
        req.fragility = Some(5.0); // padding matches the generic baseline
        req.stackable = Some(false);
        let product = validate(&req).unwrap();
        let plan = optimize(&product).unwrap();
        let recs = build_recommendations(&product, &plan);
        assert_eq!(recs.len(), 1);
    }
}
