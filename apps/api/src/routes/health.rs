use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::catalog::schema::table_names;
use crate::db::tables_present;
use crate::state::AppState;

/// GET /health
/// Liveness: returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillpath-api"
    }))
}

/// GET /api/health
/// Readiness: reference tables present and catalog loaded.
pub async fn readiness_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let stats = state.catalog.current().await.stats();

    match tables_present(&state.db, &table_names()).await {
        Ok(tables) => (
            StatusCode::OK,
            Json(json!({
                "ok": true,
                "tables_present": tables,
                "catalog_loaded": stats.loaded_at.is_some(),
                "questions": stats.questions,
                "careers": stats.careers,
            })),
        ),
        Err(e) => {
            tracing::error!("Readiness check failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "ok": false,
                    "error": "database unavailable",
                    "catalog_loaded": stats.loaded_at.is_some(),
                })),
            )
        }
    }
}
