// --- FILE: treefeeder-lib/src/utils.rs ---

use std::path::{Component, Path};

/// Joins the components of a relative path with `/`, whatever the host
/// separator is, so output stays identical across platforms.
pub(crate) fn to_slash_path(relative: &Path) -> String {
    let mut out = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}
