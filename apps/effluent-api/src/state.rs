//! Application state for the Effluent API

use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub struct AppState {
    pub db: SqlitePool,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        // Database URL is read once at startup; no ambient globals later.
        let db_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:effluent-forms.db?mode=rwc".to_string());

        tracing::info!("Connecting to database: {}", db_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { db: pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running database migrations...");

        // One document per (user, slot); the only slot in use is "latest".
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS form_documents (
                user_id TEXT NOT NULL,
                slot TEXT NOT NULL DEFAULT 'latest',
                document_json TEXT NOT NULL,
                saved_at TEXT NOT NULL,
                PRIMARY KEY (user_id, slot)
            )
            "#,
        )
        .execute(pool)
        .await?;

        tracing::info!("Migrations complete");
        Ok(())
    }
}
