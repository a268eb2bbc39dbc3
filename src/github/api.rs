//! GitHub REST operations: changed-file listing, blob metadata, comments.

use std::fmt;

use serde::Deserialize;

use crate::error::Result;
use crate::rules::SizeLookup;

use super::client::HttpClient;
use super::context::TriggerContext;

/// Files per page when listing pull request files.
pub const PAGE_SIZE: usize = 100;

/// How a pull request touched one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    /// Statuses this tool has no policy for (`changed`, `copied`, ...).
    /// They are still rejected, since only `added` is acceptable.
    #[serde(other)]
    Other,
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
            Self::Renamed => "renamed",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

/// One entry of a pull request's changed-file list.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeRecord {
    /// Repository-relative path.
    #[serde(rename = "filename")]
    pub path: String,
    pub status: ChangeStatus,
    /// Blob identifier for size lookups. Absent when the change carries no
    /// content (e.g. a removal).
    #[serde(rename = "sha")]
    pub content_ref: Option<String>,
}

/// Blob metadata; only the byte size is read, never the content.
#[derive(Debug, Deserialize)]
struct BlobMetadata {
    size: u64,
}

/// The GitHub side of one evaluation run.
pub struct GitHubHost<'a, C: HttpClient> {
    client: &'a C,
    api_url: String,
    context: TriggerContext,
}

impl<'a, C: HttpClient> GitHubHost<'a, C> {
    pub fn new(client: &'a C, api_url: &str, context: TriggerContext) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            context,
        }
    }

    /// List every file changed by the pull request, following pagination
    /// until a page comes back shorter than the page size.
    ///
    /// # Errors
    ///
    /// Returns a `Host` error if any page request fails; the run has no
    /// partial result in that case.
    pub fn list_changed_files(&self) -> Result<Vec<ChangeRecord>> {
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let url = format!(
                "{}/repos/{}/pulls/{}/files?per_page={PAGE_SIZE}&page={page}",
                self.api_url, self.context.base_repo, self.context.pr_number
            );
            let body = self.client.get(&url)?;
            let batch: Vec<ChangeRecord> = serde_json::from_str(&body)?;
            let batch_len = batch.len();
            records.extend(batch);

            if batch_len < PAGE_SIZE {
                return Ok(records);
            }
            page += 1;
        }
    }

    /// Byte size of one blob, looked up in the head repository.
    ///
    /// Content identifiers are scoped to the repository the content lives
    /// in, which for fork PRs is the head, not the base.
    ///
    /// # Errors
    ///
    /// Returns a `Host` error on request failure and a `Json` error when
    /// the response lacks a numeric size.
    pub fn blob_size(&self, content_ref: &str) -> Result<u64> {
        let url = format!(
            "{}/repos/{}/git/blobs/{content_ref}",
            self.api_url, self.context.head_repo
        );
        let body = self.client.get(&url)?;
        let blob: BlobMetadata = serde_json::from_str(&body)?;
        Ok(blob.size)
    }

    /// Post the report as a pull request comment. Called at most once per
    /// run; the caller treats failure as non-fatal.
    ///
    /// # Errors
    ///
    /// Returns a `Host` error when the comment cannot be created (e.g.
    /// insufficient token permissions).
    pub fn post_comment(&self, body: &str) -> Result<()> {
        let url = format!(
            "{}/repos/{}/issues/{}/comments",
            self.api_url, self.context.base_repo, self.context.pr_number
        );
        let payload = serde_json::json!({ "body": body }).to_string();
        self.client.post(&url, &payload)?;
        Ok(())
    }
}

impl<C: HttpClient> SizeLookup for GitHubHost<'_, C> {
    fn byte_size(&self, content_ref: &str) -> Result<u64> {
        self.blob_size(content_ref)
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
