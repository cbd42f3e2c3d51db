// --- FILE: treefeeder-lib/src/lib.rs ---

#![doc = include_str!("../README.md")]

use log::info;

// Declare modules
mod config;
mod errors;
mod filter;
mod output;
mod processing;
mod tree;
mod utils;
mod walker;

// Public API
pub use config::TraversalConfig;
pub use errors::{TreeError, TreeResult};
pub use filter::literal_pattern;
pub use output::assemble;
pub use processing::READ_ERROR_PREFIX;
pub use tree::{BLANK, CONTINUATION, LAST_CHILD, MID_CHILD};
pub use walker::{walk, Entry, EntryKind, FileRecord, WalkResult};

/// Walks `config.root` and renders the tree diagram, the summary line and
/// every included file's content as one string.
///
/// This is [`walk`] followed by [`assemble`], and the usual entry point for
/// callers that only want the final text.
///
/// # Errors
///
/// Returns [`TreeError::InvalidPattern`] if one of the glob patterns in
/// `config` cannot be compiled. Unreadable directories and files never cause
/// an error; see [`walk`].
///
/// # Examples
///
/// ```no_run
/// use treefeeder_lib::{feed_tree, TraversalConfig};
///
/// let mut config = TraversalConfig::new("./my_project");
/// config.include_patterns = vec!["*.rs".to_string()];
/// config.exclude_patterns = vec!["target".to_string()];
///
/// match feed_tree(&config, "[SEP]") {
///     Ok(text) => print!("{}", text),
///     Err(e) => eprintln!("treefeeder failed: {}", e),
/// }
/// ```
pub fn feed_tree(config: &TraversalConfig, separator: &str) -> TreeResult<String> {
    info!("Starting treefeeder walk with config: {:?}", config);
    let result = walk(config)?;
    info!(
        "Walk complete: {} directories, {} files, {} file records",
        result.dir_count,
        result.file_count,
        result.files.len()
    );
    Ok(assemble(&result, separator))
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    fn setup_go_project() -> Result<(TempDir, PathBuf)> {
        let dir = tempdir()?;
        let path = dir.path().to_path_buf();

        fs::create_dir(path.join("src"))?;
        fs::write(path.join("src").join("main.go"), "package main\n")?;
        fs::write(path.join("README.md"), "# Project\n")?;
        fs::write(path.join(".gitignore"), "bin/\n")?;

        Ok((dir, path))
    }

    #[test]
    fn test_feed_tree_with_include_pattern() -> Result<()> {
        let (_dir, path) = setup_go_project()?;
        let mut config = TraversalConfig::new(&path);
        config.include_patterns = vec!["*.go".to_string()];

        let output = feed_tree(&config, "[SEP]")?;

        let expected = "└── src\n    └── main.go\n\n1 directories, 1 files\n[SEP]\n\
                        ---\nFilePath: src/main.go\n---\npackage main\n\n[SEP]\n";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_feed_tree_everything_visible() -> Result<()> {
        let (_dir, path) = setup_go_project()?;

        let output = feed_tree(&TraversalConfig::new(&path), "")?;

        let expected = "├── README.md\n└── src\n    └── main.go\n\n1 directories, 2 files\n\n\
                        ---\nFilePath: README.md\n---\n# Project\n\n\n\
                        ---\nFilePath: src/main.go\n---\npackage main\n\n\n";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_feed_tree_with_hidden_and_exclude() -> Result<()> {
        let (_dir, path) = setup_go_project()?;
        let config = TraversalConfig {
            root: path.clone(),
            include_patterns: vec![],
            exclude_patterns: vec!["*.md".to_string()],
            include_hidden: true,
        };

        let output = feed_tree(&config, "[SEP]")?;

        assert!(output.starts_with("├── .gitignore\n└── src\n    └── main.go\n\n"));
        assert!(output.contains("1 directories, 2 files\n"));
        assert!(output.contains("FilePath: .gitignore\n---\nbin/\n"));
        assert!(!output.contains("README.md"));
        Ok(())
    }

    #[test]
    fn test_feed_tree_invalid_pattern() -> Result<()> {
        let (_dir, path) = setup_go_project()?;
        let mut config = TraversalConfig::new(&path);
        config.include_patterns = vec!["[".to_string()];

        match feed_tree(&config, "[SEP]") {
            Err(TreeError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "["),
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_feed_tree_missing_root() -> Result<()> {
        let dir = tempdir()?;
        let config = TraversalConfig::new(dir.path().join("does-not-exist"));

        let output = feed_tree(&config, "[SEP]")?;

        assert_eq!(output, "\n0 directories, 0 files\n[SEP]\n");
        Ok(())
    }
}
