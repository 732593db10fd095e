use sqlx::PgPool;
use tracing::info;

/// Reference tables, in dependency order. Every statement is idempotent.
const SCHEMA: &[(&str, &str)] = &[
    (
        "questions",
        r#"
CREATE TABLE IF NOT EXISTS questions (
    question_id   TEXT PRIMARY KEY,
    category      TEXT NOT NULL,
    question_text TEXT NOT NULL
)"#,
    ),
    (
        "options",
        r#"
CREATE TABLE IF NOT EXISTS options (
    options_id  INTEGER PRIMARY KEY,
    question_id TEXT NOT NULL REFERENCES questions(question_id) ON DELETE CASCADE,
    option_text TEXT NOT NULL,
    score       INTEGER NOT NULL
)"#,
    ),
    (
        "careers",
        r#"
CREATE TABLE IF NOT EXISTS careers (
    career_id   TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT NOT NULL
)"#,
    ),
    (
        "career_resources",
        r#"
CREATE TABLE IF NOT EXISTS career_resources (
    id            SERIAL PRIMARY KEY,
    career_id     TEXT NOT NULL REFERENCES careers(career_id) ON DELETE CASCADE,
    resource_type TEXT NOT NULL CHECK (resource_type IN ('course', 'project')),
    resource_name TEXT NOT NULL
)"#,
    ),
    (
        "career_category_mapping",
        r#"
CREATE TABLE IF NOT EXISTS career_category_mapping (
    id        SERIAL PRIMARY KEY,
    career_id TEXT NOT NULL REFERENCES careers(career_id) ON DELETE CASCADE,
    category  TEXT NOT NULL
)"#,
    ),
];

/// Names of the reference tables, for readiness checks.
pub fn table_names() -> Vec<&'static str> {
    SCHEMA.iter().map(|(name, _)| *name).collect()
}

/// Creates any missing reference table.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (name, ddl) in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
        info!("Table '{name}' ready");
    }
    Ok(())
}
