use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
/// Scoring reads from the in-memory catalog, so the pool stays small.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Returns which of `tables` exist in the current schema, in the order given.
pub async fn tables_present(pool: &PgPool, tables: &[&str]) -> Result<Vec<String>, sqlx::Error> {
    let wanted: Vec<String> = tables.iter().map(|t| t.to_string()).collect();
    let found: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables \
         WHERE table_schema = current_schema() AND table_name = ANY($1)",
    )
    .bind(&wanted)
    .fetch_all(pool)
    .await?;

    Ok(wanted.into_iter().filter(|t| found.contains(t)).collect())
}

/// Pool that never connects until first use; lets router tests run without a database.
#[cfg(test)]
pub fn lazy_pool(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy(database_url)
        .expect("lazy pool should build without connecting")
}
