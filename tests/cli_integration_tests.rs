//! Contract tests for pipeline integration.
//!
//! These verify the behavior the CI workflow depends on: exit codes,
//! fatal-precondition messages on stderr, and the documented CLI surface.
//! None of them reach the network; API failures are provoked with an
//! unroutable `--api-url`.

mod common;

use common::EventFixture;
use predicates::prelude::*;

/// Endpoint that refuses connections immediately.
const DEAD_API: &str = "http://127.0.0.1:1";

#[test]
fn help_documents_exit_codes() {
    signin_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes:"))
        .stdout(predicate::str::contains("students/"));
}

#[test]
fn version_flag_works() {
    signin_guard!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("signin-guard"));
}

#[test]
fn missing_trigger_context_is_fatal() {
    signin_guard!()
        .env_remove("GITHUB_EVENT_NAME")
        .env_remove("GITHUB_EVENT_PATH")
        .env("GITHUB_TOKEN", "ghp_test")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Trigger context error"));
}

#[test]
fn non_pull_request_event_is_fatal() {
    signin_guard!()
        .env("GITHUB_EVENT_NAME", "push")
        .env("GITHUB_TOKEN", "ghp_test")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a pull request event"));
}

#[test]
fn pr_without_repo_is_fatal() {
    signin_guard!()
        .args(["--pr", "5"])
        .env("GITHUB_TOKEN", "ghp_test")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--repo"));
}

#[test]
fn missing_token_is_fatal() {
    signin_guard!()
        .args(["--pr", "5", "--repo", "classroom/sign-in"])
        .env_remove("GITHUB_TOKEN")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn fetch_failure_is_fatal_with_host_error() {
    signin_guard!()
        .args([
            "--pr",
            "5",
            "--repo",
            "classroom/sign-in",
            "--token",
            "ghp_test",
            "--api-url",
            DEAD_API,
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GitHub API error"));
}

#[test]
fn event_payload_feeds_the_run() {
    // Context resolution succeeds from the event payload; the run then
    // fails at the fetch stage against the dead endpoint, proving the
    // payload was parsed and used.
    let fixture = EventFixture::new();
    let event_path = fixture.write_event(17, "classroom/sign-in", "student/sign-in");

    signin_guard!()
        .args(["--api-url", DEAD_API])
        .env("GITHUB_EVENT_NAME", "pull_request")
        .env("GITHUB_EVENT_PATH", &event_path)
        .env("GITHUB_TOKEN", "ghp_test")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GitHub API error"));
}

#[test]
fn malformed_event_payload_is_fatal() {
    let fixture = EventFixture::new();
    let event_path = fixture.path().join("event.json");
    std::fs::write(&event_path, "{ not json").expect("write payload");

    signin_guard!()
        .env("GITHUB_EVENT_NAME", "pull_request")
        .env("GITHUB_EVENT_PATH", &event_path)
        .env("GITHUB_TOKEN", "ghp_test")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON parse error"));
}
