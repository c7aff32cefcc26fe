//! Executing gateways: build a request, run it through the transport, parse
//! the response.
//!
//! # Design
//! Each operation is a single request/response exchange — no retry, no
//! batching, no caching. Transport failures are logged here and re-signaled
//! as `ApiError::Transport`; non-2xx responses become domain errors inside
//! the clients. Callers above this layer only ever see `ApiError`.

use crate::client::{TasksClient, UsersClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::HttpTransport;
use crate::types::{NewTask, NewUser, Task, User};

/// Gateway for the `/api/users` resource.
pub struct UsersGateway<T: HttpTransport> {
    client: UsersClient,
    transport: T,
}

impl<T: HttpTransport> UsersGateway<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: UsersClient::new(base_url),
            transport,
        }
    }

    pub fn fetch_all(&self) -> Result<Vec<User>, ApiError> {
        let request = self.client.build_list_users();
        let response = self.execute(&request)?;
        self.client.parse_list_users(response)
    }

    pub fn create(&self, draft: &NewUser) -> Result<User, ApiError> {
        let request = self.client.build_create_user(draft)?;
        let response = self.execute(&request)?;
        self.client.parse_create_user(response)
    }

    pub fn remove(&self, id: u32) -> Result<User, ApiError> {
        let request = self.client.build_delete_user(id);
        let response = self.execute(&request)?;
        self.client.parse_delete_user(response)
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request).map_err(|e| {
            log::warn!("users request to {} failed: {e}", request.path);
            ApiError::Transport(e.to_string())
        })
    }
}

/// Gateway for the `/api/tasks` resource.
pub struct TasksGateway<T: HttpTransport> {
    client: TasksClient,
    transport: T,
}

impl<T: HttpTransport> TasksGateway<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TasksClient::new(base_url),
            transport,
        }
    }

    pub fn fetch_all(&self) -> Result<Vec<Task>, ApiError> {
        let request = self.client.build_list_tasks();
        let response = self.execute(&request)?;
        self.client.parse_list_tasks(response)
    }

    pub fn create(&self, draft: &NewTask) -> Result<Task, ApiError> {
        let request = self.client.build_create_task(draft)?;
        let response = self.execute(&request)?;
        self.client.parse_create_task(response)
    }

    /// Flips the task's `completed` flag and returns the refreshed entity.
    pub fn toggle(&self, id: u32) -> Result<Task, ApiError> {
        let request = self.client.build_toggle_task(id);
        let response = self.execute(&request)?;
        self.client.parse_toggle_task(response)
    }

    pub fn remove(&self, id: u32) -> Result<Task, ApiError> {
        let request = self.client.build_delete_task(id);
        let response = self.execute(&request)?;
        self.client.parse_delete_task(response)
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request).map_err(|e| {
            log::warn!("tasks request to {} failed: {e}", request.path);
            ApiError::Transport(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::FakeTransport;

    #[test]
    fn fetch_all_users_parses_list() {
        let transport = FakeTransport::new();
        transport.push_response(200, r#"[{"id":1,"name":"Ada","email":"ada@x.com"}]"#);
        let gateway = UsersGateway::new("http://localhost:3000", transport);

        let list = gateway.fetch_all().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Ada");
    }

    #[test]
    fn transport_failure_becomes_domain_error() {
        let transport = FakeTransport::new();
        transport.push_failure("connection refused");
        let gateway = TasksGateway::new("http://localhost:3000", transport);

        let err = gateway.fetch_all().unwrap_err();
        match err {
            ApiError::Transport(msg) => assert!(msg.contains("connection refused")),
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[test]
    fn non_2xx_never_reaches_caller_as_response() {
        let transport = FakeTransport::new();
        transport.push_response(
            500,
            r#"{"error":"store_unavailable","message":"the task store is currently unavailable"}"#,
        );
        let gateway = TasksGateway::new("http://localhost:3000", transport);

        let err = gateway.fetch_all().unwrap_err();
        match err {
            ApiError::Service { message } => {
                assert_eq!(message, "the task store is currently unavailable")
            }
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[test]
    fn remove_absent_user_is_not_found() {
        let transport = FakeTransport::new();
        transport.push_response(404, r#"{"error":"not_found","message":"no entity with id 99"}"#);
        let gateway = UsersGateway::new("http://localhost:3000", transport);

        let err = gateway.remove(99).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn toggle_issues_single_patch() {
        let transport = FakeTransport::new();
        transport.push_response(200, r#"{"id":5,"title":"T","description":"","completed":true}"#);
        let handle = transport.clone();
        let gateway = TasksGateway::new("http://localhost:3000", transport);

        let task = gateway.toggle(5).unwrap();
        assert!(task.completed);
        assert_eq!(handle.request_count(), 1);
        assert_eq!(handle.request(0).path, "http://localhost:3000/api/tasks/5");
    }
}
