//! HTTP service for the taskboard API.
//!
//! # Overview
//! REST CRUD for two independently namespaced resources under `/api`:
//! `users` (always in-memory) and `tasks` (in-memory or MySQL, selected at
//! startup). The router is built by a pure `app(state)` function so tests
//! drive it with `tower::ServiceExt::oneshot` without binding a socket.
//!
//! Handlers are the only place internal failures become status codes; every
//! store error is caught and mapped to a JSON error envelope.

use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod sql;
pub mod tasks;
pub mod users;

pub use config::Config;
pub use error::{ApiError, ErrorBody, StoreError};
pub use sql::SqlTasks;
pub use tasks::{MemoryTasks, NewTask, Task, TaskStore};
pub use users::{MemoryUsers, NewUser, User};

/// Shared application state: one store per resource, handed to the router
/// at startup. The stores exclusively own their collections.
#[derive(Clone)]
pub struct AppState {
    pub users: MemoryUsers,
    pub tasks: TaskStore,
}

impl AppState {
    /// Both resources backed by process-local memory.
    pub fn in_memory() -> Self {
        Self {
            users: MemoryUsers::default(),
            tasks: TaskStore::Memory(MemoryTasks::default()),
        }
    }

    pub fn with_task_store(tasks: TaskStore) -> Self {
        Self {
            users: MemoryUsers::default(),
            tasks,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", users::routes().merge(tasks::routes()))
        .with_state(state)
}

/// `app` wrapped in a CORS layer restricted to the one configured origin.
pub fn app_with_cors(state: AppState, origin: &str) -> Result<Router, InvalidHeaderValue> {
    let origin: HeaderValue = origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);
    Ok(app(state).layer(cors))
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

/// Next id for an in-memory collection: `max(existing ids) + 1`, or 1 when
/// the collection is empty.
pub(crate) fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
