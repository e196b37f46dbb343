//! Mock API server and runner helpers for E2E tests

use serde_json::json;
use std::time::Duration;
use verify_groups::config::RunnerConfig;
use verify_groups::verify::{Aborted, Runner, VerifyReport};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const STAMP: i64 = 1_700_000_000;
pub const USERNAME: &str = "verify_users_1700000000";
pub const TOKEN: &str = "abc123";
pub const GROUP_ID: i64 = 42;
pub const EVENT_ID: i64 = 7;

/// A mock of the groups API mounted under `/api`
pub struct MockApi {
    pub server: MockServer,
}

impl MockApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    /// Config pointing at this server with a pinned stamp
    pub fn config(&self) -> RunnerConfig {
        RunnerConfig::default()
            .with_base_url(self.base_url())
            .with_stamp(STAMP)
            .with_timeout(Duration::from_secs(5))
    }

    pub async fn register(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn login(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({"username": USERNAME, "password": "password"})))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn create_group(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/api/groups"))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .and(body_json(json!({
                "name": "Test Community 1700000000",
                "description": "A test community",
                "rules": "Be nice",
                "privacy": "PUBLIC"
            })))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn create_event(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(format!("/api/groups/{GROUP_ID}/events")))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .and(body_json(json!({
                "title": "Community Meetup",
                "description": "Let's meet!",
                "startTime": "2026-12-31T10:00",
                "endTime": "2026-12-31T12:00",
                "location": "Virtual"
            })))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn list_events(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/api/groups/{GROUP_ID}/events")))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn my_groups(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/api/groups/my"))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Everything after authentication answering as a healthy server would
    pub async fn groups_and_events_ok(&self) {
        let group = json!({"id": GROUP_ID, "name": "Test Community 1700000000"});
        let event = json!({"id": EVENT_ID, "title": "Community Meetup", "location": "Virtual"});
        self.create_group(ok_json(group), 1).await;
        self.create_event(ok_json(json!({"id": EVENT_ID, "title": "Community Meetup"})), 1)
            .await;
        self.list_events(ok_json(json!([event])), 1).await;
        self.my_groups(
            ok_json(json!([{"id": GROUP_ID, "name": "Test Community 1700000000"}])),
            1,
        )
        .await;
    }

    /// The full documented scenario: fresh registration then every check passes
    pub async fn happy_path(&self) {
        self.register(ok_json(json!({"token": TOKEN})), 1).await;
        self.login(ok_json(json!({"token": "unused"})), 0).await;
        self.groups_and_events_ok().await;
    }
}

pub fn ok_json(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Drive the blocking runner off the async test thread
pub async fn run_blocking(config: RunnerConfig) -> Result<VerifyReport, Aborted> {
    tokio::task::spawn_blocking(move || Runner::new(config).run())
        .await
        .expect("runner thread panicked")
}
