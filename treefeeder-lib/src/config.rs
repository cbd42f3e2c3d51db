// --- FILE: treefeeder-lib/src/config.rs ---

use std::path::PathBuf;

/// Configuration for a single tree walk.
///
/// This struct holds everything that controls which entries show up in the
/// tree diagram and in the collected file contents. It is typically built by
/// the calling application (e.g., the CLI) from user input and config files,
/// and is never modified once the walk has started.
#[derive(Debug, Clone, Default)]
pub struct TraversalConfig {
    /// The directory the walk starts from. Relative paths in the output are
    /// computed against this path. If it is not a directory the walk yields
    /// an empty result.
    pub root: PathBuf,

    /// Shell-style glob patterns (`*`, `?`, `[seq]`) that files must match to
    /// be included. Matched against the bare file name only.
    /// An empty list means every file is a candidate.
    /// These patterns never apply to directories.
    pub include_patterns: Vec<String>,

    /// Shell-style glob patterns that exclude files *and* directories by bare
    /// name. An excluded directory is neither listed nor descended into.
    /// Exclusion always wins over inclusion.
    pub exclude_patterns: Vec<String>,

    /// If true, entries whose name starts with `.` are walked like any other.
    /// Otherwise they are skipped together with everything beneath them.
    pub include_hidden: bool,
}

impl TraversalConfig {
    /// Creates a config for `root` with no patterns and hidden entries skipped.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}
