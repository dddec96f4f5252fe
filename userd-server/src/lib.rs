//! userd-server: HTTP adapter for the user directory service
//!
//! Translates wire requests into `UserService` calls and results back into
//! responses. All decisions live in userd-core; this layer only binds,
//! routes, and maps errors to status codes.

pub mod http;

pub use http::error::ApiError;
pub use http::server::{run_server, ServerConfig, ServerError};
