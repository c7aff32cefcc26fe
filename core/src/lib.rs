//! Synchronous client for the taskboard service.
//!
//! # Overview
//! Three layers, each testable on its own:
//! - `client` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network.
//! - `gateway` executes one exchange per operation through a constructor-
//!   supplied `HttpTransport`, converting transport and HTTP failures into
//!   domain errors.
//! - `panel` holds the presentation state: a local entity list reconciled
//!   against server responses, a load state machine, and an error slot.
//!
//! # Design
//! - Clients are stateless — they hold only `base_url`.
//! - Collaborators are passed in at construction; there is no ambient
//!   registry or global client.
//! - Callers above the gateway never see status codes or raw responses,
//!   only `ApiError` values with human-readable messages.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod gateway;
pub mod http;
pub mod panel;
pub mod transport;
pub mod types;

pub use client::{TasksClient, UsersClient};
pub use error::ApiError;
pub use gateway::{TasksGateway, UsersGateway};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use panel::{LoadState, TasksPanel, UsersPanel};
pub use transport::{HttpTransport, TransportError, UreqTransport};
pub use types::{NewTask, NewUser, Task, User};
