// --- FILE: treefeeder-lib/src/walker.rs ---

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::TraversalConfig;
use crate::errors::TreeResult;
use crate::filter::EntryFilter;
use crate::processing::read_file_content;
use crate::tree::{child_padding, render_line};
use crate::utils::to_slash_path;

/// What a directory entry turned out to be, after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// FIFOs, sockets, broken symlinks and anything whose metadata could not be read.
    Other,
}

/// One item of a directory listing. Only lives while its parent is being walked.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    /// Path relative to the traversal root, always `/`-separated.
    pub relative_path: String,
    pub kind: EntryKind,
}

/// A file that made it into the tree, with its text or a read-error placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub relative_path: String,
    pub content: String,
}

/// Everything produced by one walk.
///
/// `files` holds exactly one record per file line in `tree_lines`, in the
/// same depth-first order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkResult {
    pub tree_lines: Vec<String>,
    pub dir_count: usize,
    pub file_count: usize,
    pub files: Vec<FileRecord>,
}

impl WalkResult {
    /// The tree diagram, one line per entry, each terminated by `\n`.
    pub fn tree_text(&self) -> String {
        let mut text = String::new();
        for line in &self.tree_lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Walks `config.root` depth-first and builds the tree diagram together with
/// the contents of every listed file.
///
/// Siblings are visited in plain byte-wise name order. Hidden entries and
/// entries rejected by the patterns are left out of both the diagram and the
/// file records. Problems met on the way are contained: a directory that
/// cannot be listed simply shows no children, a file that cannot be read gets
/// an `Error reading file: ...` placeholder, and a root that is not a
/// directory yields an empty result.
///
/// Symlinks are followed and there is no cycle guard, so a symlink loop keeps
/// descending until the OS refuses to resolve the path any further.
///
/// # Errors
///
/// Returns [`TreeError::InvalidPattern`](crate::TreeError::InvalidPattern) if
/// an include or exclude pattern is not a valid glob. This is checked before
/// the filesystem is touched.
pub fn walk(config: &TraversalConfig) -> TreeResult<WalkResult> {
    let filter = EntryFilter::from_config(config)?;
    let mut result = WalkResult::default();

    if !config.root.is_dir() {
        warn!(
            "Root {:?} is not a directory; producing an empty tree.",
            config.root
        );
        return Ok(result);
    }

    let walker = TreeWalker {
        root: &config.root,
        filter,
    };
    walker.walk_dir(&config.root, "", &mut result);

    debug!(
        "Walk of {:?} finished: {} directories, {} files",
        config.root, result.dir_count, result.file_count
    );
    Ok(result)
}

struct TreeWalker<'a> {
    root: &'a Path,
    filter: EntryFilter,
}

impl TreeWalker<'_> {
    fn walk_dir(&self, dir: &Path, padding: &str, acc: &mut WalkResult) {
        let Some(entries) = self.list_entries(dir) else {
            return;
        };

        let total = entries.len();
        for (index, entry) in entries.into_iter().enumerate() {
            let is_last = index + 1 == total;
            acc.tree_lines.push(render_line(padding, is_last, &entry.name));

            match entry.kind {
                EntryKind::Directory => {
                    acc.dir_count += 1;
                    let next_padding = child_padding(padding, is_last);
                    self.walk_dir(&entry.path, &next_padding, acc);
                }
                EntryKind::File => {
                    acc.file_count += 1;
                    let content = read_file_content(&entry.path);
                    acc.files.push(FileRecord {
                        relative_path: entry.relative_path,
                        content,
                    });
                }
                EntryKind::Other => {
                    debug!("Listed non-regular entry without counting it: {:?}", entry.path);
                }
            }
        }
    }

    /// Lists the immediate children of `dir`, sorted by name and already
    /// filtered. Returns `None` if the directory cannot be listed at all.
    fn list_entries(&self, dir: &Path) -> Option<Vec<Entry>> {
        debug!("Listing directory: {:?}", dir);
        let listing = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for item in listing {
            match item {
                Ok(dir_entry) => {
                    let entry = self.to_entry(&dir_entry);
                    if self.filter.accepts(&entry.name, entry.kind) {
                        entries.push(entry);
                    }
                }
                Err(e) if e.depth() == 0 || e.path() == Some(dir) => {
                    warn!("Cannot list directory {:?}, skipping its contents: {}", dir, e);
                    return None;
                }
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                }
            }
        }
        Some(entries)
    }

    fn to_entry(&self, dir_entry: &DirEntry) -> Entry {
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        let path = dir_entry.path().to_path_buf();
        let relative_path = path
            .strip_prefix(self.root)
            .map(to_slash_path)
            .unwrap_or_else(|_| name.clone());
        let kind = classify(dir_entry);
        Entry {
            name,
            path,
            relative_path,
            kind,
        }
    }
}

fn classify(dir_entry: &DirEntry) -> EntryKind {
    // Symlinks are resolved so a link to a directory is walked like one.
    let file_type = if dir_entry.path_is_symlink() {
        match fs::metadata(dir_entry.path()) {
            Ok(meta) => meta.file_type(),
            Err(_) => return EntryKind::Other,
        }
    } else {
        dir_entry.file_type()
    };

    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
