//! MySQL-backed task storage.
//!
//! Connection acquisition is pooled and implicit per call; each operation is
//! a single parameterized statement (plus a re-read where MySQL cannot
//! return the affected row). Statements never interpolate input — values go
//! through `.bind()`. Any driver error surfaces as
//! `StoreError::Unavailable`; there is no retry.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::error::StoreError;
use crate::tasks::{NewTask, Task};

const SELECT_COLUMNS: &str = "id, title, COALESCE(description, '') AS description, completed";

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS tasks (
    id INT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    completed BOOLEAN NOT NULL DEFAULT FALSE
)";

/// Pooled MySQL store for the `tasks` resource.
#[derive(Clone)]
pub struct SqlTasks {
    pool: MySqlPool,
}

impl SqlTasks {
    /// Connect, then create the `tasks` table if it does not exist.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        let store = Self { pool };
        sqlx::query(SCHEMA).execute(&store.pool).await?;
        Ok(store)
    }

    /// Build the pool without dialing; the first statement connects. The
    /// short acquire timeout makes a dead database fail fast instead of
    /// stalling the request.
    pub fn connect_lazy(url: &str) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(std::time::Duration::from_secs(3))
            .connect_lazy(url)?;
        Ok(Self { pool })
    }

    pub async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {SELECT_COLUMNS} FROM tasks ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    pub async fn create(&self, draft: NewTask) -> Result<Task, StoreError> {
        let result = sqlx::query(
            "INSERT INTO tasks (title, description, completed) VALUES (?, ?, FALSE)",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .execute(&self.pool)
        .await?;
        Ok(Task {
            id: result.last_insert_id() as u32,
            title: draft.title,
            description: draft.description,
            completed: false,
        })
    }

    pub async fn toggle(&self, id: u32) -> Result<Task, StoreError> {
        let result = sqlx::query("UPDATE tasks SET completed = NOT completed WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        self.find(id).await?.ok_or(StoreError::NotFound(id))
    }

    pub async fn remove(&self, id: u32) -> Result<Task, StoreError> {
        let task = self.find(id).await?.ok_or(StoreError::NotFound(id))?;
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(task)
    }

    async fn find(&self, id: u32) -> Result<Option<Task>, StoreError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {SELECT_COLUMNS} FROM tasks WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }
}
