//! The `tasks` resource: model, in-memory store, backend selection, and
//! handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{store_error, ApiError, StoreError};
use crate::sql::SqlTasks;
use crate::{next_id, AppState};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Creation payload. `completed` is not accepted from clients — every task
/// starts open. A missing title fails the presence check with 400.
#[derive(Debug, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// In-memory task collection, same locking discipline as `MemoryUsers`.
#[derive(Clone, Default)]
pub struct MemoryTasks {
    inner: Arc<RwLock<Vec<Task>>>,
}

impl MemoryTasks {
    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.clone()
    }

    pub async fn create(&self, draft: NewTask) -> Task {
        let mut tasks = self.inner.write().await;
        let task = Task {
            id: next_id(tasks.iter().map(|t| t.id)),
            title: draft.title,
            description: draft.description,
            completed: false,
        };
        tasks.push(task.clone());
        task
    }

    pub async fn toggle(&self, id: u32) -> Option<Task> {
        let mut tasks = self.inner.write().await;
        let task = tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.clone())
    }

    pub async fn remove(&self, id: u32) -> Option<Task> {
        let mut tasks = self.inner.write().await;
        let index = tasks.iter().position(|t| t.id == id)?;
        Some(tasks.remove(index))
    }
}

/// Task storage backend, selected once at startup. Handlers stay
/// backend-agnostic; the memory variant cannot fail.
#[derive(Clone)]
pub enum TaskStore {
    Memory(MemoryTasks),
    Sql(SqlTasks),
}

impl TaskStore {
    pub async fn list(&self) -> Result<Vec<Task>, StoreError> {
        match self {
            TaskStore::Memory(store) => Ok(store.list().await),
            TaskStore::Sql(store) => store.list().await,
        }
    }

    pub async fn create(&self, draft: NewTask) -> Result<Task, StoreError> {
        match self {
            TaskStore::Memory(store) => Ok(store.create(draft).await),
            TaskStore::Sql(store) => store.create(draft).await,
        }
    }

    pub async fn toggle(&self, id: u32) -> Result<Task, StoreError> {
        match self {
            TaskStore::Memory(store) => {
                store.toggle(id).await.ok_or(StoreError::NotFound(id))
            }
            TaskStore::Sql(store) => store.toggle(id).await,
        }
    }

    pub async fn remove(&self, id: u32) -> Result<Task, StoreError> {
        match self {
            TaskStore::Memory(store) => {
                store.remove(id).await.ok_or(StoreError::NotFound(id))
            }
            TaskStore::Sql(store) => store.remove(id).await,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", patch(toggle_task).delete(delete_task))
}

async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.tasks.list().await.map_err(task_error)?;
    Ok(Json(tasks))
}

async fn create_task(
    State(state): State<AppState>,
    Json(draft): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }
    let task = state.tasks.create(draft).await.map_err(task_error)?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Task>, ApiError> {
    let task = state.tasks.toggle(id).await.map_err(task_error)?;
    Ok(Json(task))
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Task>, ApiError> {
    let task = state.tasks.remove(id).await.map_err(task_error)?;
    Ok(Json(task))
}

fn task_error(err: StoreError) -> ApiError {
    store_error("task", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn created_tasks_start_open() {
        let store = MemoryTasks::default();
        let task = store.create(draft("a")).await;
        assert_eq!(task.id, 1);
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn toggle_flips_exactly_once_per_call() {
        let store = MemoryTasks::default();
        let task = store.create(draft("a")).await;

        let toggled = store.toggle(task.id).await.unwrap();
        assert!(toggled.completed);
        let toggled = store.toggle(task.id).await.unwrap();
        assert!(!toggled.completed);
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_none() {
        let store = MemoryTasks::default();
        assert!(store.toggle(7).await.is_none());
    }

    #[tokio::test]
    async fn create_then_list_round_trips_draft() {
        let store = MemoryTasks::default();
        store
            .create(NewTask {
                title: "Walk dog".to_string(),
                description: "before lunch".to_string(),
            })
            .await;

        let tasks = store.list().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Walk dog");
        assert_eq!(tasks[0].description, "before lunch");
        assert!(!tasks[0].completed);
    }

    #[tokio::test]
    async fn memory_backend_never_fails() {
        let store = TaskStore::Memory(MemoryTasks::default());
        assert!(store.list().await.unwrap().is_empty());
        let err = store.remove(1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(1)));
    }

    #[test]
    fn new_task_defaults_description() {
        let input: NewTask = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(input.title, "Only title");
        assert!(input.description.is_empty());
    }

    #[test]
    fn new_task_ignores_client_completed_flag() {
        // `completed` is not part of the draft; it is dropped on the floor.
        let input: NewTask =
            serde_json::from_str(r#"{"title":"T","completed":true}"#).unwrap();
        assert_eq!(input.title, "T");
    }
}
