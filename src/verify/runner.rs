//! The verification runner.
//!
//! Walks the fixed chain of checks against the API. Each check gates the
//! next; the first failure aborts the run with the steps completed so far.

use std::time::Instant;

use reqwest::StatusCode;
use tracing::info;

use super::result::{Aborted, StepResult, VerifyReport};
use super::step::Step;
use crate::client::ApiClient;
use crate::config::RunnerConfig;
use crate::error::VerifyError;
use crate::models::{
    contains_id, AuthMethod, Credentials, EventRequest, GroupRequest, Identified, LoginRequest,
    RegisterRequest, TokenResponse,
};
use crate::output;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const GROUPS_PATH: &str = "/groups";
pub const MY_GROUPS_PATH: &str = "/groups/my";

pub fn group_events_path(group_id: i64) -> String {
    format!("/groups/{group_id}/events")
}

/// Body marker the server uses when a username already exists.
const USERNAME_TAKEN_MARKER: &str = "taken";

pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run every check in order.
    pub fn run(&self) -> Result<VerifyReport, Aborted> {
        let mut progress = Progress::default();

        let credentials = self.config.credentials();
        let client = ApiClient::new(&self.config)
            .map_err(|error| progress.abort(error))?;

        let (token, auth) = progress.step(|| {
            let (token, auth) = authenticate(&client, &credentials)?;
            Ok(((token, auth), auth.to_string()))
        })?;
        let client = client.with_token(token);

        let group_id = progress.step(|| {
            let id = create_group(&client, self.config.stamp)?;
            Ok((id, format!("group {id}")))
        })?;

        let event_id = progress.step(|| {
            let id = create_event(&client, group_id)?;
            Ok((id, format!("event {id}")))
        })?;

        progress.step(|| {
            let count = verify_group_events(&client, group_id, event_id)?;
            Ok(((), format!("{count} event(s), {event_id} present")))
        })?;

        progress.step(|| {
            let count = verify_my_groups(&client, group_id)?;
            Ok(((), format!("{count} group(s), {group_id} present")))
        })?;
        debug_assert!(progress.current.is_terminal());

        Ok(VerifyReport {
            username: credentials.username,
            auth,
            group_id,
            event_id,
            steps: progress.completed,
        })
    }
}

/// Position in the step chain plus the steps passed so far.
struct Progress {
    current: Step,
    completed: Vec<StepResult>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current: Step::Authenticate,
            completed: Vec::new(),
        }
    }
}

impl Progress {
    /// Run `check` as the current step and advance on success.
    fn step<T>(
        &mut self,
        check: impl FnOnce() -> Result<(T, String), VerifyError>,
    ) -> Result<T, Aborted> {
        let step = self.current;
        let started = Instant::now();
        match check() {
            Ok((value, detail)) => {
                info!(%step, %detail, "step passed");
                self.completed
                    .push(StepResult::new(step, started.elapsed(), detail));
                if let Some(next) = step.next() {
                    self.current = next;
                }
                Ok(value)
            }
            Err(error) => Err(self.abort(error)),
        }
    }

    fn abort(&mut self, error: VerifyError) -> Aborted {
        Aborted {
            step: self.current,
            completed: std::mem::take(&mut self.completed),
            error,
        }
    }
}

/// Register, or log in when the username is already taken.
fn authenticate(
    client: &ApiClient,
    credentials: &Credentials,
) -> Result<(String, AuthMethod), VerifyError> {
    output::log(format!("Registering user {}...", credentials.username));
    let response = client.post_json(
        REGISTER_PATH,
        &RegisterRequest::from(credentials),
        "Registration",
    )?;

    if response.is_ok() {
        let token = extract_token(response.json("Registration")?, "Registration")?;
        output::log("Registered successfully.");
        return Ok((token, AuthMethod::Registered));
    }

    if response.status == StatusCode::BAD_REQUEST && response.body.contains(USERNAME_TAKEN_MARKER)
    {
        output::log("User exists, logging in...");
        let response = client
            .post_json(LOGIN_PATH, &LoginRequest::from(credentials), "Login")?
            .ensure_ok("Login")?;
        let token = extract_token(response.json("Login")?, "Login")?;
        output::log("Logged in successfully.");
        return Ok((token, AuthMethod::LoggedIn));
    }

    Err(VerifyError::UnexpectedStatus {
        context: "Registration".to_string(),
        status: response.status.as_u16(),
        body: response.body,
    })
}

fn extract_token(response: TokenResponse, context: &str) -> Result<String, VerifyError> {
    if response.token.is_empty() {
        return Err(VerifyError::InvalidResponse {
            context: context.to_string(),
            message: "empty token".to_string(),
        });
    }
    Ok(response.token)
}

fn create_group(client: &ApiClient, stamp: i64) -> Result<i64, VerifyError> {
    output::log("Creating Social Group...");
    let created: Identified = client
        .post_json(
            GROUPS_PATH,
            &GroupRequest::test_community(stamp),
            "Group creation",
        )?
        .ensure_ok("Group creation")?
        .json("Group creation")?;
    output::log(format!("Group created with ID: {}", created.id));
    Ok(created.id)
}

fn create_event(client: &ApiClient, group_id: i64) -> Result<i64, VerifyError> {
    output::log("Creating Group Event...");
    let event = EventRequest::community_meetup()?;
    let created: Identified = client
        .post_json(&group_events_path(group_id), &event, "Event creation")?
        .ensure_ok("Event creation")?
        .json("Event creation")?;
    output::log(format!("Event created with ID: {}", created.id));
    Ok(created.id)
}

/// Returns the number of events listed.
fn verify_group_events(
    client: &ApiClient,
    group_id: i64,
    event_id: i64,
) -> Result<usize, VerifyError> {
    output::log("Fetching Group Events...");
    let events: Vec<Identified> = client
        .get(&group_events_path(group_id), "Get events")?
        .ensure_ok("Get events")?
        .json("Get events")?;

    if events.is_empty() {
        return Err(VerifyError::EmptyList { what: "events" });
    }
    if !contains_id(&events, event_id) {
        return Err(VerifyError::MissingIdentifier {
            message: "Event ID mismatch".to_string(),
            id: event_id,
            response: None,
        });
    }
    output::log("Events fetched successfully.");
    Ok(events.len())
}

/// Returns the number of groups listed. Dumps the listing when the group is absent.
fn verify_my_groups(client: &ApiClient, group_id: i64) -> Result<usize, VerifyError> {
    output::log("Verifying My Groups...");
    let listing: serde_json::Value = client
        .get(MY_GROUPS_PATH, "Get my groups")?
        .ensure_ok("Get my groups")?
        .json("Get my groups")?;
    let groups: Vec<Identified> =
        serde_json::from_value(listing.clone()).map_err(|e| VerifyError::InvalidResponse {
            context: "Get my groups".to_string(),
            message: e.to_string(),
        })?;

    if !contains_id(&groups, group_id) {
        output::log(format!(
            "My groups response: {}",
            output::pretty_json(&listing)
        ));
        return Err(VerifyError::MissingIdentifier {
            message: "Created group not found in 'My Groups'".to_string(),
            id: group_id,
            response: Some(listing),
        });
    }
    output::log("My Groups verified.");
    Ok(groups.len())
}
