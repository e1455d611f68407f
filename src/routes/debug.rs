use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let stats = state.cache.get_stats().await;

    Json(json!({
        "status": "ok",
        "checks": {
            "cache": {
                "backend": state.cache.backend_name(),
                "hits": stats.hits,
                "misses": stats.misses,
                "hit_rate": stats.hit_rate,
            }
        }
    }))
}
