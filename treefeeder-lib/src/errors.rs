// --- FILE: treefeeder-lib/src/errors.rs ---

use thiserror::Error;

/// Errors that can surface from the `treefeeder` library.
///
/// Problems met while walking (unreadable directories, unreadable files)
/// are contained inside the walk and never show up here. What remains are
/// mistakes made by the caller, such as handing over a malformed glob.
#[derive(Error, Debug)]
pub enum TreeError {
    /// One of the include or exclude patterns in
    /// [`TraversalConfig`](crate::TraversalConfig) is not a valid shell glob
    /// (for example an unterminated `[` character class).
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// A convenience type alias for `Result<T, TreeError>`.
pub type TreeResult<T> = Result<T, TreeError>;
