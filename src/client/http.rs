//! HTTP client construction.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::VerifyError;

pub(crate) const USER_AGENT: &str = concat!("verify-groups/", env!("CARGO_PKG_VERSION"));

/// Create a blocking client whose timeouts bound every call.
/// - connect_timeout: Maximum time to establish a TCP connection
/// - timeout: Maximum time for the entire request (connection + data transfer)
pub(crate) fn create_http_client(timeout: Duration) -> Result<Client, VerifyError> {
    Client::builder()
        .connect_timeout(timeout)
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| VerifyError::Transport {
            context: "HTTP client setup".to_string(),
            source,
        })
}

/// Join a base URL and an endpoint path with exactly one slash.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
