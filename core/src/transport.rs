//! Transport seam between the request builders and the network.
//!
//! # Design
//! `HttpTransport` is the single collaborator the gateways need; it is
//! supplied at construction time. `UreqTransport` is the production
//! implementation. Tests substitute a scripted fake, so everything above this
//! seam runs without sockets.

use std::fmt;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// The request never produced an HTTP response.
#[derive(Debug)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Executes one HTTP exchange. Implementations must return non-2xx responses
/// as data, not as errors — status interpretation belongs to the clients.
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a shared `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Disables ureq's status-code-as-error behavior so 4xx/5xx responses
    /// come back as data for the clients to interpret.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (&request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
            (HttpMethod::Patch, Some(body)) => self
                .agent
                .patch(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Patch, None) => self.agent.patch(&request.path).send_empty(),
        };

        let mut response = result.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;

    /// Scripted transport: hands out queued responses in order and records
    /// every request it executed. Clones share state, so a test can keep a
    /// handle after moving the transport into a gateway.
    #[derive(Clone)]
    pub struct FakeTransport {
        inner: Rc<Inner>,
    }

    struct Inner {
        responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self {
                inner: Rc::new(Inner {
                    responses: RefCell::new(VecDeque::new()),
                    requests: RefCell::new(Vec::new()),
                }),
            }
        }

        pub fn push_response(&self, status: u16, body: &str) {
            self.inner.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
        }

        pub fn push_failure(&self, message: &str) {
            self.inner
                .responses
                .borrow_mut()
                .push_back(Err(TransportError(message.to_string())));
        }

        pub fn request_count(&self) -> usize {
            self.inner.requests.borrow().len()
        }

        pub fn request(&self, index: usize) -> HttpRequest {
            self.inner.requests.borrow()[index].clone()
        }
    }

    impl HttpTransport for FakeTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.inner.requests.borrow_mut().push(request.clone());
            self.inner
                .responses
                .borrow_mut()
                .pop_front()
                .expect("FakeTransport: no scripted response left")
        }
    }
}
