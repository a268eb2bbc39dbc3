//! Trigger context: which pull request to evaluate, and where it lives.

use std::fs;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Result, SigninGuardError};

/// Coordinates of a single evaluation run.
///
/// `base_repo` and `head_repo` are `owner/name` strings; they differ when
/// the pull request comes from a fork. Blob lookups go to the head
/// repository, file listing and comments go to the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    pub pr_number: u64,
    pub base_repo: String,
    pub head_repo: String,
    /// True when the run was triggered by a pull request event, which is
    /// the only situation where a comment may be posted.
    pub from_pull_request_event: bool,
}

/// Subset of the `pull_request` webhook payload this tool reads.
#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: PullRequestPayload,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    base: BranchPayload,
    head: BranchPayload,
}

#[derive(Debug, Deserialize)]
struct BranchPayload {
    repo: RepoPayload,
}

#[derive(Debug, Deserialize)]
struct RepoPayload {
    full_name: String,
}

impl TriggerContext {
    /// Resolve the context from CLI arguments or the Actions environment.
    ///
    /// Explicit `--pr`/`--repo` arguments take precedence and mark the run
    /// as manual (no comment is posted). Otherwise the `pull_request` event
    /// payload referenced by `GITHUB_EVENT_PATH` is parsed.
    ///
    /// # Errors
    ///
    /// Returns a `Context` error when neither CLI arguments nor a usable
    /// pull request event are available.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        if let Some(pr_number) = cli.pr {
            let base_repo = cli.repo.clone().ok_or_else(|| {
                SigninGuardError::Context("--pr requires --repo <owner/name>".to_string())
            })?;
            let head_repo = cli.head_repo.clone().unwrap_or_else(|| base_repo.clone());
            return Ok(Self {
                pr_number,
                base_repo,
                head_repo,
                from_pull_request_event: false,
            });
        }

        Self::from_event_env()
    }

    fn from_event_env() -> Result<Self> {
        let event_name = std::env::var("GITHUB_EVENT_NAME").map_err(|_| {
            SigninGuardError::Context(
                "GITHUB_EVENT_NAME is not set; run inside GitHub Actions or pass --pr and --repo"
                    .to_string(),
            )
        })?;

        if !event_name.starts_with("pull_request") {
            return Err(SigninGuardError::Context(format!(
                "Event '{event_name}' is not a pull request event"
            )));
        }

        let event_path = std::env::var("GITHUB_EVENT_PATH").map_err(|_| {
            SigninGuardError::Context("GITHUB_EVENT_PATH is not set".to_string())
        })?;

        let payload = fs::read_to_string(&event_path)?;
        Self::from_event_payload(&payload)
    }

    /// Parse a `pull_request` event payload into a context.
    ///
    /// # Errors
    ///
    /// Returns a `Json` error when the payload does not contain the
    /// expected pull request fields.
    pub fn from_event_payload(payload: &str) -> Result<Self> {
        let event: EventPayload = serde_json::from_str(payload)?;

        Ok(Self {
            pr_number: event.pull_request.number,
            base_repo: event.pull_request.base.repo.full_name,
            head_repo: event.pull_request.head.repo.full_name,
            from_pull_request_event: true,
        })
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
