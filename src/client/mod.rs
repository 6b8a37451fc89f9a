//! HTTP client for the Semantix API
//!
//! Thin wrapper over `reqwest` that resolves endpoints against the API root
//! from [`ClientContext`], attaches the caller's nonce, and decodes JSON
//! replies into the shared record types.

pub mod context;
pub mod view;

pub use context::ClientContext;

use crate::seo::{Activity, ClusterNode, ClusterRequest, Entity, NewProject, Project};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by [`ApiClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server answered outside the 2xx range
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Named header has a value that cannot be sent
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Per-request options; the defaults describe a bodiless GET.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Headers layered over the defaults, replacing same-named ones
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    /// POST with a JSON-encoded body
    pub fn post_json<B: Serialize>(body: &B) -> Result<Self, ClientError> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_string(body)?),
            ..Default::default()
        })
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// API client bound to one [`ClientContext`]
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    context: ClientContext,
    bearer_token: Option<String>,
}

impl ApiClient {
    pub fn new(context: ClientContext) -> Self {
        Self {
            http: Client::new(),
            context,
            bearer_token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into()).filter(|t: &String| !t.is_empty());
        self
    }

    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    /// Endpoint URL: the API root followed by the endpoint, as-is.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.context.api_url(), endpoint)
    }

    fn headers(&self, overrides: &[(String, String)]) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(crate::auth::nonce::NONCE_HEADER),
            header_value(crate::auth::nonce::NONCE_HEADER, self.context.nonce())?,
        );
        if let Some(token) = &self.bearer_token {
            headers.insert(
                AUTHORIZATION,
                header_value(AUTHORIZATION.as_str(), &format!("Bearer {}", token))?,
            );
        }

        for (name, value) in overrides {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ClientError::InvalidHeader(name.clone()))?;
            let value = header_value(name.as_str(), value)?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Perform one request and decode the JSON reply.
    ///
    /// A non-2xx status fails with [`ClientError::Status`] without reading
    /// the body. Failures are logged before being returned.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        self.execute(endpoint, options)
            .await
            .inspect_err(|e| tracing::error!("API request failed: {}", e))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let url = self.url_for(endpoint);
        let mut builder = self
            .http
            .request(options.method.clone(), &url)
            .headers(self.headers(&options.headers)?);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        tracing::debug!("{} {}", options.method, url);
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.request("projects", RequestOptions::default()).await
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ClientError> {
        self.request("projects", RequestOptions::post_json(project)?)
            .await
    }

    pub async fn list_activities(&self) -> Result<Vec<Activity>, ClientError> {
        self.request("activities", RequestOptions::default()).await
    }

    pub async fn list_entities(&self) -> Result<Vec<Entity>, ClientError> {
        self.request("entities", RequestOptions::default()).await
    }

    pub async fn generate_clusters(
        &self,
        request: &ClusterRequest,
    ) -> Result<ClusterNode, ClientError> {
        self.request("clusters", RequestOptions::post_json(request)?)
            .await
    }
}

/// Header values may hold credentials, so errors only name the header.
fn header_value(name: &str, value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader(name.to_string()))
}
