#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the signin-guard binary.
#[macro_export]
macro_rules! signin_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("signin-guard"))
    };
}

/// Temporary directory holding a pull request event payload fixture.
pub struct EventFixture {
    pub dir: TempDir,
}

impl EventFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes a minimal `pull_request` event payload and returns its path.
    pub fn write_event(&self, pr_number: u64, base_repo: &str, head_repo: &str) -> PathBuf {
        let payload = format!(
            r#"{{
  "action": "opened",
  "pull_request": {{
    "number": {pr_number},
    "base": {{ "repo": {{ "full_name": "{base_repo}" }} }},
    "head": {{ "repo": {{ "full_name": "{head_repo}" }} }}
  }}
}}"#
        );
        let path = self.dir.path().join("event.json");
        fs::write(&path, payload).expect("Failed to write event payload");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
