use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::VerifyError;

/// A fully read response: status plus raw body text.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Every endpoint under test answers 200 on success; nothing else counts.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Fail with the status and body unless the status is 200.
    pub fn ensure_ok(self, context: &str) -> Result<Self, VerifyError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(VerifyError::UnexpectedStatus {
                context: context.to_string(),
                status: self.status.as_u16(),
                body: self.body,
            })
        }
    }

    /// Decode the body.
    pub fn json<T: DeserializeOwned>(&self, context: &str) -> Result<T, VerifyError> {
        serde_json::from_str(&self.body).map_err(|e| VerifyError::InvalidResponse {
            context: context.to_string(),
            message: e.to_string(),
        })
    }
}
