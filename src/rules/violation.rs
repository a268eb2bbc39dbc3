use std::fmt;

use serde::Serialize;

use super::{CONTRIBUTION_ROOT, REQUIRED_FILE, SIZE_LIMIT_BYTES};

/// A single rule failure with enough payload to render an actionable
/// message. One run may accumulate many; they are never deduplicated and
/// keep check-execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Violation {
    /// The change is not an addition (`modified`, `removed`, ...).
    NotAnAddition { path: String, status: String },
    /// The path does not start with the contribution root.
    OutsideRoot { path: String },
    /// Fewer than three path segments: the file sits at the wrong level.
    WrongRootLevel { path: String },
    /// More than three path segments: subdirectories are forbidden.
    ForbiddenSubdirectory { path: String },
    /// No change produced a valid contribution folder.
    NoFolder,
    /// More than one distinct folder claimed in a single pull request.
    MultipleFolders { folders: Vec<String> },
    /// Folder name does not have the `<date>-<identifier>` shape.
    FolderNameShape { folder: String },
    /// Date part is not a `yyyy-mm-dd` with month 1-12 and day 1-31.
    InvalidDate { date: String },
    /// Identifier part is not lowercase alphanumeric with hyphens.
    InvalidIdentifier { identifier: String },
    /// File sits outside the claimed folder.
    OutsideFolder { path: String, folder: String },
    /// Second (or later) file with a capped optional extension.
    ExtraOptionalFile { file: String, extension: String },
    /// File is neither the required file nor a recognized optional one.
    DisallowedFile { file: String },
    /// The required file never appeared in the claimed folder.
    MissingRequiredFile { folder: String },
    /// Change carries no content reference, so its size cannot be checked.
    MissingContentRef { path: String },
    /// The host could not report a byte size for the file.
    SizeUnavailable { path: String, reason: String },
    /// File is strictly larger than the size ceiling.
    Oversize { path: String, size: u64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnAddition { path, status } => {
                write!(f, "`{path}` is {status}; only added files are allowed")
            }
            Self::OutsideRoot { path } => {
                write!(f, "`{path}` is outside the `{CONTRIBUTION_ROOT}/` directory")
            }
            Self::WrongRootLevel { path } => {
                write!(
                    f,
                    "`{path}` is at the wrong level; files belong directly in `{CONTRIBUTION_ROOT}/<folder>/`"
                )
            }
            Self::ForbiddenSubdirectory { path } => {
                write!(f, "`{path}` uses a subdirectory; nesting is not allowed")
            }
            Self::NoFolder => {
                write!(
                    f,
                    "no contribution folder found under `{CONTRIBUTION_ROOT}/`"
                )
            }
            Self::MultipleFolders { folders } => {
                write!(
                    f,
                    "changes span multiple folders ({}); a pull request may touch exactly one",
                    folders.join(", ")
                )
            }
            Self::FolderNameShape { folder } => {
                write!(
                    f,
                    "folder `{folder}` does not match `<yyyy-mm-dd>-<identifier>`"
                )
            }
            Self::InvalidDate { date } => {
                write!(f, "`{date}` is not a valid date (yyyy-mm-dd)")
            }
            Self::InvalidIdentifier { identifier } => {
                write!(
                    f,
                    "identifier `{identifier}` must be lowercase letters, digits and hyphens"
                )
            }
            Self::OutsideFolder { path, folder } => {
                write!(f, "`{path}` is not inside `{CONTRIBUTION_ROOT}/{folder}/`")
            }
            Self::ExtraOptionalFile { file, extension } => {
                write!(f, "`{file}` exceeds the limit of one .{extension} file")
            }
            Self::DisallowedFile { file } => {
                write!(
                    f,
                    "`{file}` is not allowed; only {REQUIRED_FILE}, one .png and one .css are"
                )
            }
            Self::MissingRequiredFile { folder } => {
                write!(f, "folder `{folder}` is missing the required {REQUIRED_FILE}")
            }
            Self::MissingContentRef { path } => {
                write!(f, "`{path}` has no content reference; size cannot be checked")
            }
            Self::SizeUnavailable { path, reason } => {
                write!(f, "size of `{path}` could not be determined: {reason}")
            }
            Self::Oversize { path, size } => {
                write!(
                    f,
                    "`{path}` is {size} bytes, over the {SIZE_LIMIT_BYTES} byte limit"
                )
            }
        }
    }
}
