//! Result types for a verification run

use std::time::Duration;

use super::step::Step;
use crate::error::VerifyError;
use crate::models::AuthMethod;

/// A step that passed
#[derive(Debug, Clone)]
pub struct StepResult {
    pub step: Step,
    pub duration: Duration,
    /// What the step established, e.g. the created identifier
    pub detail: String,
}

impl StepResult {
    pub fn new(step: Step, duration: Duration, detail: impl Into<String>) -> Self {
        Self {
            step,
            duration,
            detail: detail.into(),
        }
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} - {} ({}ms)",
            self.step,
            self.detail,
            self.duration.as_millis()
        )
    }
}

/// Everything a successful run established
#[derive(Debug, Clone)]
pub struct VerifyReport {
    pub username: String,
    pub auth: AuthMethod,
    pub group_id: i64,
    pub event_id: i64,
    pub steps: Vec<StepResult>,
}

impl VerifyReport {
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }
}

/// A run that stopped at `step`
#[derive(Debug, thiserror::Error)]
#[error("{step}: {error}")]
pub struct Aborted {
    pub step: Step,
    /// Steps that passed before the failure
    pub completed: Vec<StepResult>,
    #[source]
    pub error: VerifyError,
}

impl Aborted {
    pub fn exit_code(&self) -> u8 {
        self.error.exit_code()
    }
}
