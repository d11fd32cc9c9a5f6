use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use hrportal_core::models::history::HistoryThreadSummary;
use hrportal_core::models::role::Role;
use hrportal_core::models::wire::{LoginRequest, QueryRequest, QueryResponse, ThreadMessage};

use crate::error::GatewayError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A policy document to index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file: PathBuf,
    pub department: String,
    /// Audience the document is made visible to.
    pub role: Role,
}

/// Operations the portal backend offers.
///
/// Implemented over HTTP by [`crate::HttpBackend`]; tests substitute an
/// in-memory fake. Methods return boxed futures for dyn compatibility.
pub trait Backend: Send + Sync {
    /// `POST /login`. Any non-success status is an error.
    fn login<'a>(&'a self, request: &'a LoginRequest) -> BoxFuture<'a, Result<(), GatewayError>>;

    /// `POST /query`.
    fn query<'a>(
        &'a self,
        request: &'a QueryRequest,
    ) -> BoxFuture<'a, Result<QueryResponse, GatewayError>>;

    /// `GET /history?department=`. `department` is sent as given.
    fn history<'a>(
        &'a self,
        department: &'a str,
    ) -> BoxFuture<'a, Result<Vec<HistoryThreadSummary>, GatewayError>>;

    /// `GET /history/thread/{message_id}?department=`.
    fn thread<'a>(
        &'a self,
        message_id: i64,
        department: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ThreadMessage>, GatewayError>>;

    /// `POST /upload` as multipart form data.
    fn upload<'a>(&'a self, request: &'a UploadRequest) -> BoxFuture<'a, Result<(), GatewayError>>;
}
