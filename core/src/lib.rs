//! Synchronous client core for the to-do service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, so this
//! crate needs no async runtime.
//!
//! # Design
//! - `ToDoClient` is stateless; it holds only `base_url`.
//! - Each route has a `build_*` / `parse_*` pair, keeping the I/O boundary
//!   explicit.
//! - DTOs are defined independently of the `todo-server` crate; the
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ToDoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{SaveToDo, ToDo};
