//! Domain DTOs for the taskboard API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently.
//! Keeping them separate means this crate never links against the server or
//! Axum; integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A registered user returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Request payload for creating a new user. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// A single task returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Request payload for creating a new task. New tasks always start with
/// `completed = false`; the server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
}
