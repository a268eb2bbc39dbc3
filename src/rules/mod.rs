mod engine;
mod naming;
mod path;
mod size;
mod violation;
mod whitelist;

pub use engine::{RunSummary, ValidationReport, evaluate};
pub use size::SizeLookup;
pub use violation::Violation;
pub use whitelist::FileWhitelist;

/// Root directory every contribution must live under.
pub const CONTRIBUTION_ROOT: &str = "students";

/// The one file every contribution folder must contain.
pub const REQUIRED_FILE: &str = "index.html";

/// Per-file size ceiling in bytes (100 KiB).
pub const SIZE_LIMIT_BYTES: u64 = 100 * 1024;

/// Required segment count of a well-formed path: `students/<folder>/<file>`.
pub const PATH_DEPTH: usize = 3;
