mod assessment;
mod catalog;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::loader::initial_load;
use crate::catalog::schema::ensure_schema;
use crate::catalog::CatalogHandle;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillPath API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Scoring: {} questions x {} points per category, top {} categories, {} careers, text weight {}",
        config.scoring.questions_per_category,
        config.scoring.max_score_per_question,
        config.scoring.top_categories,
        config.scoring.career_limit,
        config.scoring.text_weight
    );

    // Initialize PostgreSQL and the reference tables
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db)
        .await
        .context("failed to create reference tables")?;

    // Load the reference catalog; scoring stays disabled until this succeeds
    let catalog = CatalogHandle::new(initial_load(&db).await);

    if let Some(secs) = config.catalog_refresh_secs {
        spawn_catalog_refresh(catalog.clone(), db.clone(), Duration::from_secs(secs));
        info!("Catalog refresh every {secs}s");
    }

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        catalog,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically re-reads the reference tables. A failed refresh keeps the
/// previous snapshot.
fn spawn_catalog_refresh(catalog: CatalogHandle, db: PgPool, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await; // first tick fires immediately; startup already loaded
        loop {
            ticker.tick().await;
            if let Err(e) = catalog.reload(&db).await {
                warn!("Scheduled catalog refresh failed: {e}");
            }
        }
    });
}
