pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::engine::handlers;
use crate::errors::AppError;
use crate::report;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Optimization engine
        .route("/api/v1/optimize", post(handlers::handle_optimize))
        .route(
            "/api/v1/batch-optimize",
            post(handlers::handle_batch_optimize),
        )
        .route("/api/v1/materials", get(handlers::handle_materials))
        .route("/api/v1/categories", get(handlers::handle_categories))
        // Reporting
        .route("/api/v1/report", post(report::handle_report))
        // Downstream consumers of a PackagingPlan (not part of the engine)
        .route("/api/v1/dieline", post(not_implemented))
        .route("/api/v1/render3d", post(not_implemented))
}
