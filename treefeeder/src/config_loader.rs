use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use directories::BaseDirs;
use log::debug;
use serde::Deserialize;

use treefeeder_lib::{literal_pattern, TraversalConfig};

use crate::Cli;

pub const DEFAULT_SEPARATOR: &str = "[SEP]";
const LOCAL_CONFIG_NAME: &str = ".treefeeder.toml";
const LOCAL_IGNORE_NAME: &str = ".treefeederignore";

/// Everything `main` needs to run one invocation.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub traversal: TraversalConfig,
    pub separator: String,
}

/// Merges built-in defaults, the global config, the local config, an explicit
/// `--config` file and finally the CLI flags (highest precedence).
pub fn build_run_settings(cli: &Cli, target_path: &Path) -> Result<RunSettings> {
    let mut flags = Flags::default();
    let mut includes = PatternAccumulator::new("include");
    let mut excludes = PatternAccumulator::new("exclude");

    if !cli.no_config {
        if let Some(base_dirs) = BaseDirs::new() {
            let config_dir = base_dirs.config_dir().join("treefeeder");
            apply_config_file(
                &config_dir.join("config.toml"),
                &mut flags,
                &mut includes,
                &mut excludes,
            )?;
            apply_ignore_file(&config_dir.join("ignore"), &mut excludes)?;
        } else {
            debug!("No base directories available; skipping global config search");
        }

        apply_config_file(
            &target_path.join(LOCAL_CONFIG_NAME),
            &mut flags,
            &mut includes,
            &mut excludes,
        )?;
        apply_ignore_file(&target_path.join(LOCAL_IGNORE_NAME), &mut excludes)?;

        if let Some(explicit_path) = cli.config_path.as_ref() {
            apply_config_file(explicit_path, &mut flags, &mut includes, &mut excludes)?;
        }
    } else if let Some(explicit_path) = cli.config_path.as_ref() {
        debug!(
            "--no-config specified; skipping explicitly requested config file {:?}",
            explicit_path
        );
    }

    // CLI overrides (highest precedence)
    if cli.include_hidden {
        flags.include_hidden = true;
    }
    if let Some(separator) = cli.separator.as_ref() {
        flags.separator = separator.clone();
    }

    // Support comma-separated patterns (e.g. -I "*.log,target")
    for raw in &cli.include_patterns {
        includes.merge(split_pattern_list(raw));
    }
    for raw in &cli.exclude_patterns {
        excludes.merge(split_pattern_list(raw));
    }

    // Keep a previous run's output file out of the tree.
    if let Some(name) = cli
        .output
        .as_ref()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
    {
        excludes.push(literal_pattern(name));
    }

    let traversal = TraversalConfig {
        root: target_path.to_path_buf(),
        include_patterns: includes.into_vec(),
        exclude_patterns: excludes.into_vec(),
        include_hidden: flags.include_hidden,
    };

    Ok(RunSettings {
        traversal,
        separator: flags.separator,
    })
}

#[derive(Debug)]
struct Flags {
    include_hidden: bool,
    separator: String,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            include_hidden: false,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

#[derive(Debug)]
struct PatternAccumulator {
    kind: &'static str,
    patterns: Vec<String>,
    seen: HashSet<String>,
}

impl PatternAccumulator {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            patterns: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn push<S: AsRef<str>>(&mut self, pattern: S) {
        let candidate = pattern.as_ref();
        if candidate.is_empty() {
            return;
        }
        if self.seen.insert(candidate.to_string()) {
            debug!("Adding {} pattern: {}", self.kind, candidate);
            self.patterns.push(candidate.to_string());
        } else {
            debug!("Skipping duplicate {} pattern: {}", self.kind, candidate);
        }
    }

    fn merge<I>(&mut self, iter: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for item in iter {
            self.push(item);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.patterns
    }
}

/// Splits a CLI value on commas that sit outside a `[...]` character class
/// and trims each piece, so `"*.log, [,_]*.txt"` yields two patterns.
fn split_pattern_list(raw: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    // Position of the first class member once inside `[...]`.
    let mut class_body: Option<usize> = None;

    for (i, c) in raw.char_indices() {
        match (c, class_body) {
            ('[', None) => {
                let body = i + 1;
                let body = if raw[body..].starts_with('!') { body + 1 } else { body };
                class_body = Some(body);
            }
            // A `]` right at the start of the class is a member, not the end.
            (']', Some(body)) if i > body => class_body = None,
            (',', None) => {
                pieces.push(raw[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(raw[start..].trim());
    pieces
}

fn apply_config_file(
    path: &Path,
    flags: &mut Flags,
    includes: &mut PatternAccumulator,
    excludes: &mut PatternAccumulator,
) -> Result<()> {
    if !path.exists() {
        debug!("Config file {:?} not found; skipping", path);
        return Ok(());
    }

    debug!("Loading config from {:?}", path);
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;

    let parsed: FileConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;

    if let Some(section) = parsed.treefeeder {
        if let Some(values) = section.include {
            includes.merge(values);
        }
        if let Some(values) = section.exclude {
            excludes.merge(values);
        }
        if let Some(value) = section.include_hidden {
            flags.include_hidden = value;
        }
        if let Some(value) = section.separator {
            flags.separator = value;
        }
    }

    Ok(())
}

fn apply_ignore_file(path: &Path, excludes: &mut PatternAccumulator) -> Result<()> {
    if !path.exists() {
        debug!("Ignore file {:?} not found; skipping", path);
        return Ok(());
    }

    debug!("Loading ignore patterns from {:?}", path);
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file {:?}", path))?;

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        excludes.push(line);
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    treefeeder: Option<TreefeederSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TreefeederSection {
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    separator: Option<String>,
    include_hidden: Option<bool>,
}
