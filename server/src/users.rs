//! The `users` resource: model, in-memory store, and handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::{next_id, AppState};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Creation payload. Fields default to empty and the handler rejects blank
/// values; a client-supplied `id` is an unknown field and is ignored.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// In-memory user collection. The `Vec` keeps insertion order; all access
/// goes through the lock, so id assignment never reads stale state.
#[derive(Clone, Default)]
pub struct MemoryUsers {
    inner: Arc<RwLock<Vec<User>>>,
}

impl MemoryUsers {
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.clone()
    }

    /// Assigns `max(existing ids) + 1`, or 1 when empty.
    pub async fn create(&self, draft: NewUser) -> User {
        let mut users = self.inner.write().await;
        let user = User {
            id: next_id(users.iter().map(|u| u.id)),
            name: draft.name,
            email: draft.email,
        };
        users.push(user.clone());
        user
    }

    pub async fn remove(&self, id: u32) -> Option<User> {
        let mut users = self.inner.write().await;
        let index = users.iter().position(|u| u.id == id)?;
        Some(users.remove(index))
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", delete(delete_user))
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if draft.name.trim().is_empty() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    if draft.email.trim().is_empty() {
        return Err(ApiError::Validation("email is required".to_string()));
    }
    let user = state.users.create(draft).await;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.remove(id).await.ok_or(ApiError::NotFound(id))?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = MemoryUsers::default();
        for i in 1..=3 {
            let user = store.create(draft("u", "u@x.com")).await;
            assert_eq!(user.id, i);
        }
    }

    #[tokio::test]
    async fn next_id_skips_freed_ids() {
        let store = MemoryUsers::default();
        store.create(draft("a", "a@x.com")).await;
        let second = store.create(draft("b", "b@x.com")).await;
        store.remove(1).await.unwrap();
        let third = store.create(draft("c", "c@x.com")).await;
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn remove_unknown_id_leaves_list_unchanged() {
        let store = MemoryUsers::default();
        store.create(draft("a", "a@x.com")).await;
        assert!(store.remove(42).await.is_none());
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryUsers::default();
        store.create(draft("first", "1@x.com")).await;
        store.create(draft("second", "2@x.com")).await;
        let names: Vec<_> = store.list().await.into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn new_user_ignores_client_supplied_id() {
        let input: NewUser =
            serde_json::from_str(r#"{"id":99,"name":"Ada","email":"ada@x.com"}"#).unwrap();
        assert_eq!(input.name, "Ada");
    }

    #[test]
    fn new_user_defaults_missing_fields_to_empty() {
        let input: NewUser = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.name.is_empty());
        assert!(input.email.is_empty());
    }

    #[test]
    fn user_serializes_to_json() {
        let user = User {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@x.com");
    }
}
