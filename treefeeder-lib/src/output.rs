// --- FILE: treefeeder-lib/src/output.rs ---

use crate::walker::WalkResult;

/// Renders a [`WalkResult`] as the final text blob.
///
/// The first section is the tree diagram followed by a blank line and the
/// `N directories, M files` summary. Each file record then gets its own
/// section:
///
/// ```text
/// ---
/// FilePath: src/main.go
/// ---
/// <content>
/// ```
///
/// Sections (including a trailing empty one) are glued together with
/// `separator` followed by a newline, so every section starts on a fresh
/// line even when `separator` is empty.
pub fn assemble(result: &WalkResult, separator: &str) -> String {
    let glue = format!("{}\n", separator);

    let mut sections = Vec::with_capacity(result.files.len() + 2);
    sections.push(format!(
        "{}\n{} directories, {} files\n",
        result.tree_text(),
        result.dir_count,
        result.file_count
    ));
    for record in &result.files {
        sections.push(format!(
            "---\nFilePath: {}\n---\n{}\n",
            record.relative_path, record.content
        ));
    }
    sections.push(String::new());

    sections.join(&glue)
}
