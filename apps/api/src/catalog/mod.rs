// Reference catalog: questions, options, careers, category mappings, resources.
// Loaded from PostgreSQL into an immutable snapshot that scoring reads without locking.

pub mod handlers;
pub mod loader;
pub mod schema;
pub mod snapshot;

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::catalog::snapshot::{CatalogSnapshot, CatalogStats};

/// Shared pointer to the current snapshot. Reloads swap the `Arc`; readers
/// keep whatever snapshot they cloned for the rest of their request.
#[derive(Clone, Default)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<CatalogSnapshot>>>,
}

impl CatalogHandle {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    pub async fn current(&self) -> Arc<CatalogSnapshot> {
        self.current.read().await.clone()
    }

    pub async fn replace(&self, snapshot: CatalogSnapshot) {
        *self.current.write().await = Arc::new(snapshot);
    }

    /// Re-reads the tables; on failure the previous snapshot stays in place.
    pub async fn reload(&self, pool: &PgPool) -> Result<CatalogStats, sqlx::Error> {
        let snapshot = loader::load_snapshot(pool).await?;
        let stats = snapshot.stats();
        self.replace(snapshot).await;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::snapshot::fixtures::sample_catalog;
    use super::*;

    #[tokio::test]
    async fn test_replace_swaps_snapshot_for_new_readers() {
        let handle = CatalogHandle::new(CatalogSnapshot::empty());
        let before = handle.current().await;
        assert!(!before.is_loaded());

        handle.replace(sample_catalog()).await;

        assert!(handle.current().await.is_loaded());
        // earlier readers keep their snapshot
        assert!(!before.is_loaded());
    }
}
