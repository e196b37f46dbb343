//! Configuration for a verification run.

use std::time::Duration;

use crate::error::VerifyError;
use crate::models::credentials::Credentials;

/// Base URL of the API under test.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";

/// Default timeout for each request (connection + transfer).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Password used for the generated account.
pub const DEFAULT_PASSWORD: &str = "password";

/// Configuration for a verification run
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// API base URL without a trailing slash
    pub base_url: String,
    /// Maximum time to wait for a single request to complete
    pub request_timeout: Duration,
    /// Unix timestamp used to make usernames and group names unique
    pub stamp: i64,
    /// Explicit username; generated from `stamp` when unset
    pub username: Option<String>,
    pub password: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            stamp: chrono::Utc::now().timestamp(),
            username: None,
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl RunnerConfig {
    /// Set the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Pin the uniqueness stamp (tests and reruns).
    pub fn with_stamp(mut self, stamp: i64) -> Self {
        self.stamp = stamp;
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Credentials for this run.
    pub fn credentials(&self) -> Credentials {
        let credentials = Credentials::generate(self.stamp, &self.password);
        match &self.username {
            Some(username) => credentials.with_username(username),
            None => credentials,
        }
    }

    /// Reject settings that would make every request fail for a local reason.
    pub fn validate(&self) -> Result<(), VerifyError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(VerifyError::Config {
                message: format!(
                    "base URL '{}' must start with http:// or https://",
                    self.base_url
                ),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(VerifyError::Config {
                message: "request timeout must be greater than zero".to_string(),
            });
        }
        if matches!(&self.username, Some(name) if name.trim().is_empty()) {
            return Err(VerifyError::Config {
                message: "username cannot be empty".to_string(),
            });
        }
        if self.password.is_empty() {
            return Err(VerifyError::Config {
                message: "password cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
