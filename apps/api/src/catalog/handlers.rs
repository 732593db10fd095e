use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::catalog::snapshot::{CatalogStats, QuizQuestion};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub reloaded: bool,
    pub stats: CatalogStats,
}

/// GET /api/questions
///
/// The quiz: every question with its selectable options.
pub async fn handle_list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizQuestion>>, AppError> {
    let catalog = state.catalog.current().await;
    if !catalog.is_loaded() {
        return Err(AppError::CatalogUnavailable);
    }
    Ok(Json(catalog.questions().to_vec()))
}

/// POST /api/v1/catalog/reload
///
/// Re-reads the reference tables after a bulk import.
pub async fn handle_reload_catalog(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let stats = state.catalog.reload(&state.db).await?;
    info!("Catalog reloaded on request ({} careers)", stats.careers);
    Ok(Json(ReloadResponse {
        reloaded: true,
        stats,
    }))
}
