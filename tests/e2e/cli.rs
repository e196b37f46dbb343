//! Exit codes and console output of the compiled binary

use serde_json::json;
use std::process::{Command, Output};
use wiremock::ResponseTemplate;

use super::helpers::*;

/// Arguments pointing the binary at `api` with the pinned stamp
fn api_args(api: &MockApi) -> Vec<String> {
    vec![
        "--base-url".into(),
        api.base_url(),
        "--stamp".into(),
        STAMP.to_string(),
    ]
}

async fn run_cli(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_verify-groups"))
            .args(&args)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run verify-groups")
    })
    .await
    .expect("cli thread panicked")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test]
async fn test_successful_run_exits_zero() {
    let api = MockApi::start().await;
    api.happy_path().await;

    let output = run_cli(api_args(&api)).await;
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "{text}");
    assert!(text.contains("[VERIFY] Registered successfully."));
    assert!(text.contains("Group created with ID: 42"));
    assert!(text.contains("Event created with ID: 7"));
    assert!(text.trim_end().ends_with("SUCCESS: All checks passed."));
}

#[tokio::test]
async fn test_failed_check_exits_one_without_success_marker() {
    let api = MockApi::start().await;
    api.register(ok_json(json!({"token": TOKEN})), 1).await;
    api.create_group(ResponseTemplate::new(500).set_body_string("db down"), 1)
        .await;
    api.create_event(ok_json(json!({"id": EVENT_ID})), 0).await;

    let output = run_cli(api_args(&api)).await;
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "{text}");
    assert!(text.contains("[FAIL] Group creation failed: 500 db down"));
    assert!(!text.contains("SUCCESS"));
}

#[tokio::test]
async fn test_abort_reports_only_the_failure() {
    let api = MockApi::start().await;
    api.register(ok_json(json!({"token": TOKEN})), 1).await;
    api.create_group(ok_json(json!({"id": GROUP_ID})), 1).await;
    api.create_event(ResponseTemplate::new(500).set_body_string("boom"), 1)
        .await;

    let output = run_cli(api_args(&api)).await;
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "{text}");
    assert!(!text.contains("✓"), "{text}");
    assert!(text.contains("✗ create event"));
    assert!(text.contains("[FAIL] Event creation failed: 500 boom"));
}

#[tokio::test]
async fn test_login_then_missing_group_dumps_listing() {
    let api = MockApi::start().await;
    api.register(
        ResponseTemplate::new(400).set_body_string("Username is already taken"),
        1,
    )
    .await;
    api.login(ok_json(json!({"token": TOKEN})), 1).await;
    api.create_group(ok_json(json!({"id": GROUP_ID})), 1).await;
    api.create_event(ok_json(json!({"id": EVENT_ID})), 1).await;
    api.list_events(ok_json(json!([{"id": EVENT_ID}])), 1).await;
    api.my_groups(ok_json(json!([{"id": 99}])), 1).await;

    let output = run_cli(api_args(&api)).await;
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "{text}");
    assert!(text.contains("User exists, logging in..."));
    assert!(text.contains("My groups response: [\n  {\n    \"id\": 99\n  }\n]"));
    assert!(text.contains("[FAIL] Created group not found in 'My Groups'"));
}

#[tokio::test]
async fn test_unreachable_server_exits_one() {
    let output = run_cli(vec![
        "--base-url".into(),
        "http://127.0.0.1:9/api".into(),
        "--timeout".into(),
        "2".into(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("[FAIL] Registration request failed"));
}

#[tokio::test]
async fn test_invalid_base_url_exits_one() {
    let output = run_cli(vec!["--base-url".into(), "ftp://example.com".into()]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("[FAIL] configuration error"));
}
