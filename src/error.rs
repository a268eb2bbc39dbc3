use thiserror::Error;

#[derive(Error, Debug)]
pub enum SigninGuardError {
    #[error("Trigger context error: {0}")]
    Context(String),

    #[error("GitHub API error: {0}")]
    Host(String),

    #[error("Pull request #{0} contains no changed files")]
    EmptyChangeList(u64),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SigninGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
