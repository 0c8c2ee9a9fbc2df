use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Returns service status plus a readiness map for the engine stages.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "ecopack-api",
        "timestamp": Utc::now(),
        "engine": {
            "validator": "ready",
            "dimension_optimizer": "ready",
            "material_recommender": "ready",
            "scorer": "ready"
        }
    }))
}
