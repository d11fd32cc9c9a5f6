use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use hrportal_core::models::history::HistoryThreadSummary;
use hrportal_core::models::wire::{LoginRequest, QueryRequest, QueryResponse, ThreadMessage};

use crate::backend::{Backend, BoxFuture, UploadRequest};
use crate::client::build_client;
use crate::error::GatewayError;

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// [`Backend`] talking to the portal over HTTP.
///
/// All calls share one cookie store, so the session cookie set by a
/// successful login authenticates every later request.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base: String,
}

impl HttpBackend {
    pub fn new(api_base: &str) -> Result<Self, GatewayError> {
        Self::with_client(build_client()?, api_base)
    }

    /// Use a caller-supplied client. It should have a cookie store enabled.
    pub fn with_client(client: Client, api_base: &str) -> Result<Self, GatewayError> {
        let parsed = Url::parse(api_base).map_err(|e| GatewayError::InvalidBaseUrl {
            url: api_base.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl {
                url: api_base.to_string(),
                reason: "not a base URL".to_string(),
            });
        }

        Ok(Self {
            client,
            base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn login_impl(&self, request: &LoginRequest) -> Result<(), GatewayError> {
        info!(role = %request.role, department = %request.department, "logging in");

        let resp = self
            .client
            .post(self.url("/login"))
            .json(request)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn query_impl(&self, request: &QueryRequest) -> Result<QueryResponse, GatewayError> {
        info!(
            department = %request.department,
            policy_country = %request.policy_country,
            "sending query"
        );

        let resp = self
            .client
            .post(self.url("/query"))
            .json(request)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn history_impl(
        &self,
        department: &str,
    ) -> Result<Vec<HistoryThreadSummary>, GatewayError> {
        let resp = self
            .client
            .get(self.url("/history"))
            .query(&[("department", department)])
            .send()
            .await?;
        let threads: Vec<HistoryThreadSummary> = read_json(resp).await?;
        debug!(department, count = threads.len(), "history fetched");
        Ok(threads)
    }

    async fn thread_impl(
        &self,
        message_id: i64,
        department: &str,
    ) -> Result<Vec<ThreadMessage>, GatewayError> {
        let resp = self
            .client
            .get(self.url(&format!("/history/thread/{message_id}")))
            .query(&[("department", department)])
            .send()
            .await?;
        read_json(resp).await
    }

    async fn upload_impl(&self, request: &UploadRequest) -> Result<(), GatewayError> {
        let bytes = tokio::fs::read(&request.file)
            .await
            .map_err(|source| GatewayError::ReadFile {
                path: request.file.display().to_string(),
                source,
            })?;
        let file_name = request
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "policy.pdf".to_string());

        info!(
            file_name = %file_name,
            size = bytes.len(),
            department = %request.department,
            "uploading policy document"
        );

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = Form::new()
            .part("file", part)
            .text("department", request.department.clone())
            .text("role", request.role.as_str());

        let resp = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

impl Backend for HttpBackend {
    fn login<'a>(&'a self, request: &'a LoginRequest) -> BoxFuture<'a, Result<(), GatewayError>> {
        Box::pin(self.login_impl(request))
    }

    fn query<'a>(
        &'a self,
        request: &'a QueryRequest,
    ) -> BoxFuture<'a, Result<QueryResponse, GatewayError>> {
        Box::pin(self.query_impl(request))
    }

    fn history<'a>(
        &'a self,
        department: &'a str,
    ) -> BoxFuture<'a, Result<Vec<HistoryThreadSummary>, GatewayError>> {
        Box::pin(self.history_impl(department))
    }

    fn thread<'a>(
        &'a self,
        message_id: i64,
        department: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ThreadMessage>, GatewayError>> {
        Box::pin(self.thread_impl(message_id, department))
    }

    fn upload<'a>(&'a self, request: &'a UploadRequest) -> BoxFuture<'a, Result<(), GatewayError>> {
        Box::pin(self.upload_impl(request))
    }
}

async fn ensure_success(resp: Response) -> Result<Response, GatewayError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(GatewayError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, GatewayError> {
    let resp = ensure_success(resp).await?;
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
