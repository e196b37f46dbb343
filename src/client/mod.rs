//! Blocking JSON client for the API under test.
//!
//! One `reqwest` client is built per run and reused for every call. Once a
//! session token is attached it is sent as a bearer credential on each
//! request. Every call returns the full status and body so callers decide
//! what counts as success.

mod http;
mod response;

pub use response::ApiResponse;

use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use tracing::debug;

use crate::config::RunnerConfig;
use crate::error::VerifyError;
use http::{create_http_client, join_url};

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &RunnerConfig) -> Result<Self, VerifyError> {
        Ok(Self {
            http: create_http_client(config.request_timeout)?,
            base_url: config.base_url.clone(),
            token: None,
        })
    }

    /// Attach the session token to all later requests.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// `POST` a JSON body.
    pub fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<ApiResponse, VerifyError> {
        let url = join_url(&self.base_url, path);
        debug!(%url, "POST");
        self.send(self.http.post(&url).json(body), context)
    }

    pub fn get(&self, path: &str, context: &str) -> Result<ApiResponse, VerifyError> {
        let url = join_url(&self.base_url, path);
        debug!(%url, "GET");
        self.send(self.http.get(&url), context)
    }

    fn send(&self, request: RequestBuilder, context: &str) -> Result<ApiResponse, VerifyError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let transport = |source| VerifyError::Transport {
            context: context.to_string(),
            source,
        };

        let response = request.send().map_err(transport)?;
        let status = response.status();
        let body = response.text().map_err(transport)?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        Ok(ApiResponse::new(status, body))
    }
}
