use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

/// Handle to the SQLite store. Cloning shares the underlying pool; each
/// request checks a connection out for the duration of its query and the
/// pool takes it back on every exit path.
#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Open (creating the file if needed) and make sure the `todo` table
    /// exists before serving any request.
    pub async fn connect(url: &str) -> Result<Self> {
        info!("connecting to database: {url}");
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Private in-memory database for tests. Capped at one connection so
    /// every query sees the same memory store.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todo (
                id INTEGER PRIMARY KEY,
                task TEXT NOT NULL,
                completed BOOLEAN NOT NULL,
                is_editing BOOLEAN NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Required Debug implementation for `Db`
impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").finish()
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_schema() -> Result<()> {
        let db = Db::in_memory().await?;
        sqlx::query("SELECT id, task, completed, is_editing FROM todo")
            .fetch_all(db.pool())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() -> Result<()> {
        let db = Db::in_memory().await?;
        db.ensure_schema().await?;
        db.ensure_schema().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_id_assigned_by_storage() -> Result<()> {
        let db = Db::in_memory().await?;
        sqlx::query("INSERT INTO todo (task, completed, is_editing) VALUES ('a', 0, 0)")
            .execute(db.pool())
            .await?;
        let (id,): (i64,) = sqlx::query_as("SELECT id FROM todo")
            .fetch_one(db.pool())
            .await?;
        assert_eq!(id, 1);
        Ok(())
    }
}
