//! Outbound HTTP to the remote service.
//!
//! A single [`ApiClient`] owns the connection pool and the access token. It is
//! built once at startup and shared by `Arc` with everything that issues requests.

pub mod auth;
pub mod client;
pub mod error;
pub mod routes;

pub use auth::{AuthError, AuthGateway, Credentials, TokenResponse};
pub use client::ApiClient;
pub use error::ApiError;
pub use routes::RouteTable;
