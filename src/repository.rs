use crate::db::driver::Db;
use crate::models::{Todo, TodoPayload};

/// Persistence operations over the `todo` table. Every method is a single
/// storage call, committed before it returns.
#[derive(Debug, Clone)]
pub struct TodoRepository {
    db: Db,
}

impl TodoRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub async fn insert(&self, payload: &TodoPayload) -> sqlx::Result<Todo> {
        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todo (task, completed, is_editing)
            VALUES (?, ?, ?)
            RETURNING id, task, completed, is_editing
            "#,
        )
        .bind(&payload.task)
        .bind(payload.completed)
        .bind(payload.is_editing)
        .fetch_one(self.db.pool())
        .await
    }

    pub async fn list(&self, skip: i64, limit: i64) -> sqlx::Result<Vec<Todo>> {
        sqlx::query_as::<_, Todo>("SELECT * FROM todo ORDER BY id LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(skip)
            .fetch_all(self.db.pool())
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> sqlx::Result<Option<Todo>> {
        sqlx::query_as::<_, Todo>("SELECT * FROM todo WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
    }

    /// Case-insensitive substring match on the task description.
    pub async fn find_by_name(&self, name: &str) -> sqlx::Result<Vec<Todo>> {
        sqlx::query_as::<_, Todo>(
            "SELECT * FROM todo WHERE LOWER(task) LIKE '%' || LOWER(?) || '%' ORDER BY id",
        )
        .bind(name)
        .fetch_all(self.db.pool())
        .await
    }

    pub async fn delete_all(&self) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM todo")
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_by_id(&self, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Deletes every row whose task matches the substring; may remove more
    /// than one record.
    pub async fn delete_by_name(&self, name: &str) -> sqlx::Result<u64> {
        let result =
            sqlx::query("DELETE FROM todo WHERE LOWER(task) LIKE '%' || LOWER(?) || '%'")
                .bind(name)
                .execute(self.db.pool())
                .await?;
        Ok(result.rows_affected())
    }

    /// Overwrites all mutable fields of the record; the id never changes.
    /// Returns `None` when no record carries the id.
    pub async fn update(&self, id: i64, payload: &TodoPayload) -> sqlx::Result<Option<Todo>> {
        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todo
            SET task = ?, completed = ?, is_editing = ?
            WHERE id = ?
            RETURNING id, task, completed, is_editing
            "#,
        )
        .bind(&payload.task)
        .bind(payload.completed)
        .bind(payload.is_editing)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await
    }
}
