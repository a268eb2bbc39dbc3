mod api;
mod client;
mod context;

pub use api::{ChangeRecord, ChangeStatus, GitHubHost, PAGE_SIZE};
pub use client::{HttpClient, ReqwestClient};
pub use context::TriggerContext;
