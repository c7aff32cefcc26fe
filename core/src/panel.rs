//! Presentation state for the two entity lists.
//!
//! # Design
//! A panel owns a local copy of its entity list, reconciled only after a
//! successful server round-trip. Mutations are independent fire-and-reconcile
//! actions: on success the local list is patched with exactly what the server
//! returned, on failure the error slot is filled and the list stays as it
//! was. Nothing here is optimistic, so there is nothing to roll back.

use crate::error::ApiError;
use crate::gateway::{TasksGateway, UsersGateway};
use crate::transport::HttpTransport;
use crate::types::{NewTask, NewUser, Task, User};

/// Load lifecycle of a panel's entity list, driven once by `refresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

/// Users list with a creation form.
pub struct UsersPanel<T: HttpTransport> {
    gateway: UsersGateway<T>,
    pub users: Vec<User>,
    pub state: LoadState,
    pub error: Option<String>,
    pub draft_name: String,
    pub draft_email: String,
}

impl<T: HttpTransport> UsersPanel<T> {
    pub fn new(gateway: UsersGateway<T>) -> Self {
        Self {
            gateway,
            users: Vec::new(),
            state: LoadState::Idle,
            error: None,
            draft_name: String::new(),
            draft_email: String::new(),
        }
    }

    /// Fetch the authoritative list. Called once on initialization.
    pub fn refresh(&mut self) {
        self.state = LoadState::Loading;
        match self.gateway.fetch_all() {
            Ok(users) => {
                self.users = users;
                self.state = LoadState::Loaded;
                self.error = None;
            }
            Err(err) => {
                self.state = LoadState::LoadFailed;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Submit the draft form. An empty field short-circuits locally without
    /// issuing a request.
    pub fn submit(&mut self) {
        if self.draft_name.trim().is_empty() || self.draft_email.trim().is_empty() {
            self.error = Some("name and email are required".to_string());
            return;
        }
        let draft = NewUser {
            name: self.draft_name.trim().to_string(),
            email: self.draft_email.trim().to_string(),
        };
        match self.gateway.create(&draft) {
            Ok(user) => {
                self.users.push(user);
                self.draft_name.clear();
                self.draft_email.clear();
                self.error = None;
            }
            Err(err) => self.set_error(err),
        }
    }

    pub fn remove(&mut self, id: u32) {
        match self.gateway.remove(id) {
            Ok(removed) => {
                self.users.retain(|u| u.id != removed.id);
                self.error = None;
            }
            Err(err) => self.set_error(err),
        }
    }

    fn set_error(&mut self, err: ApiError) {
        self.error = Some(err.to_string());
    }
}

/// Tasks list with a creation form and per-row completion toggle.
pub struct TasksPanel<T: HttpTransport> {
    gateway: TasksGateway<T>,
    pub tasks: Vec<Task>,
    pub state: LoadState,
    pub error: Option<String>,
    pub draft_title: String,
    pub draft_description: String,
}

impl<T: HttpTransport> TasksPanel<T> {
    pub fn new(gateway: TasksGateway<T>) -> Self {
        Self {
            gateway,
            tasks: Vec::new(),
            state: LoadState::Idle,
            error: None,
            draft_title: String::new(),
            draft_description: String::new(),
        }
    }

    /// Fetch the authoritative list. Called once on initialization.
    pub fn refresh(&mut self) {
        self.state = LoadState::Loading;
        match self.gateway.fetch_all() {
            Ok(tasks) => {
                self.tasks = tasks;
                self.state = LoadState::Loaded;
                self.error = None;
            }
            Err(err) => {
                self.state = LoadState::LoadFailed;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Submit the draft form. A blank title short-circuits locally without
    /// issuing a request.
    pub fn submit(&mut self) {
        if self.draft_title.trim().is_empty() {
            self.error = Some("title is required".to_string());
            return;
        }
        let draft = NewTask {
            title: self.draft_title.trim().to_string(),
            description: self.draft_description.trim().to_string(),
        };
        match self.gateway.create(&draft) {
            Ok(task) => {
                self.tasks.push(task);
                self.draft_title.clear();
                self.draft_description.clear();
                self.error = None;
            }
            Err(err) => self.set_error(err),
        }
    }

    /// Flip a task's completion and replace the local entry with the
    /// server's refreshed copy.
    pub fn toggle(&mut self, id: u32) {
        match self.gateway.toggle(id) {
            Ok(updated) => {
                if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == updated.id) {
                    *slot = updated;
                }
                self.error = None;
            }
            Err(err) => self.set_error(err),
        }
    }

    pub fn remove(&mut self, id: u32) {
        match self.gateway.remove(id) {
            Ok(removed) => {
                self.tasks.retain(|t| t.id != removed.id);
                self.error = None;
            }
            Err(err) => self.set_error(err),
        }
    }

    fn set_error(&mut self, err: ApiError) {
        self.error = Some(err.to_string());
    }
}
