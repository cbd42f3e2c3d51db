// --- FILE: treefeeder-lib/src/filter.rs ---

use glob::Pattern;
use log::{debug, trace};

use crate::config::TraversalConfig;
use crate::errors::{TreeError, TreeResult};
use crate::walker::EntryKind;

/// Compiled include/exclude rules for one walk.
///
/// Patterns are compiled once up front so that a malformed pattern is
/// reported to the caller before any filesystem access happens.
#[derive(Debug)]
pub(crate) struct EntryFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    include_hidden: bool,
}

impl EntryFilter {
    pub(crate) fn from_config(config: &TraversalConfig) -> TreeResult<Self> {
        let include = compile_patterns(&config.include_patterns)?;
        let exclude = compile_patterns(&config.exclude_patterns)?;
        debug!(
            "Compiled {} include and {} exclude pattern(s); include_hidden = {}",
            include.len(),
            exclude.len(),
            config.include_hidden
        );
        Ok(Self {
            include,
            exclude,
            include_hidden: config.include_hidden,
        })
    }

    /// Decides whether an entry with the given bare `name` and `kind` is
    /// part of the tree (and, for files, of the collected contents).
    pub(crate) fn accepts(&self, name: &str, kind: EntryKind) -> bool {
        if !self.include_hidden && is_hidden(name) {
            trace!("Skipping hidden entry: {}", name);
            return false;
        }
        if self.exclude.iter().any(|p| p.matches(name)) {
            trace!("Skipping excluded entry: {}", name);
            return false;
        }
        // Include patterns only ever narrow down regular files.
        if kind == EntryKind::File
            && !self.include.is_empty()
            && !self.include.iter().any(|p| p.matches(name))
        {
            trace!("Skipping file not matching any include pattern: {}", name);
            return false;
        }
        true
    }
}

/// Escapes glob metacharacters so `name` matches only itself when used as a
/// pattern (e.g. to exclude one concrete file name).
pub fn literal_pattern(name: &str) -> String {
    Pattern::escape(name)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn compile_patterns(patterns: &[String]) -> TreeResult<Vec<Pattern>> {
    patterns
        .iter()
        .map(|raw| {
            Pattern::new(raw).map_err(|source| TreeError::InvalidPattern {
                pattern: raw.clone(),
                source,
            })
        })
        .collect()
}
