use sqlx::PgPool;
use tracing::{error, info};

use crate::catalog::snapshot::CatalogSnapshot;
use crate::models::catalog::{
    CareerCategoryRow, CareerResourceRow, CareerRow, OptionRow, QuestionRow,
};

/// Reads every reference table and builds a fresh snapshot.
/// Mapping rows are read in insertion order; the ranker's tie-break depends on it.
pub async fn load_snapshot(pool: &PgPool) -> Result<CatalogSnapshot, sqlx::Error> {
    let questions = sqlx::query_as::<_, QuestionRow>(
        "SELECT question_id, category, question_text FROM questions ORDER BY question_id",
    )
    .fetch_all(pool)
    .await?;

    let options = sqlx::query_as::<_, OptionRow>(
        "SELECT options_id, question_id, option_text, score FROM options ORDER BY options_id",
    )
    .fetch_all(pool)
    .await?;

    let careers = sqlx::query_as::<_, CareerRow>(
        "SELECT career_id, name, description FROM careers ORDER BY career_id",
    )
    .fetch_all(pool)
    .await?;

    let mappings = sqlx::query_as::<_, CareerCategoryRow>(
        "SELECT career_id, category FROM career_category_mapping ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let resources = sqlx::query_as::<_, CareerResourceRow>(
        "SELECT career_id, resource_type, resource_name FROM career_resources \
         ORDER BY career_id, resource_type, resource_name",
    )
    .fetch_all(pool)
    .await?;

    let snapshot = CatalogSnapshot::from_rows(questions, options, careers, mappings, resources);
    let stats = snapshot.stats();
    info!(
        "Catalog loaded: {} questions, {} options, {} careers, {} mappings, {} resources",
        stats.questions, stats.options, stats.careers, stats.mappings, stats.resources
    );
    Ok(snapshot)
}

/// Loads the snapshot, logging and swallowing failures so startup can proceed
/// with an unloaded catalog.
pub async fn initial_load(pool: &PgPool) -> CatalogSnapshot {
    load_snapshot(pool).await.unwrap_or_else(|e| {
        error!("Initial catalog load failed, scoring disabled until reload: {e}");
        CatalogSnapshot::empty()
    })
}
