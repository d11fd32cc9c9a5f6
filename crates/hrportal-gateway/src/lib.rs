//! hrportal-gateway
//!
//! HTTP access to the HR portal backend: login, query, history and policy
//! upload, with the session cookie carried between calls.

pub mod backend;
pub mod client;
pub mod error;
pub mod http;

pub use crate::backend::{Backend, BoxFuture, UploadRequest};
pub use crate::error::GatewayError;
pub use crate::http::HttpBackend;
