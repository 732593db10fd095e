use sqlx::PgPool;

use crate::catalog::CatalogHandle;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// In-memory reference catalog. Scoring reads only from here.
    pub catalog: CatalogHandle,
}
