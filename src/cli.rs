use clap::{Parser, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "signin-guard")]
#[command(author, version, about = "Sign-in pull request guard - enforce contribution rules")]
#[command(long_about = "Validates the files changed by a pull request against the sign-in\n\
    repository policy: one contribution folder under students/, named\n\
    <yyyy-mm-dd>-<identifier>, containing index.html plus at most one .png\n\
    and one .css, every file 100 KiB or smaller.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Violations found, or the run could not be evaluated")]
pub struct Cli {
    /// Pull request number (defaults to the triggering event's PR)
    #[arg(long)]
    pub pr: Option<u64>,

    /// Base repository as owner/name (defaults to the triggering event's repo)
    #[arg(long)]
    pub repo: Option<String>,

    /// Head repository as owner/name, for fork PRs (defaults to --repo)
    #[arg(long)]
    pub head_repo: Option<String>,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub REST API root URL
    #[arg(long, default_value = "https://api.github.com")]
    pub api_url: String,

    /// Evaluate and print the report without posting a PR comment
    #[arg(long)]
    pub no_comment: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
