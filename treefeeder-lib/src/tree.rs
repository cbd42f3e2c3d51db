// --- FILE: treefeeder-lib/src/tree.rs ---

/// Connector for an entry that has more siblings below it.
pub const MID_CHILD: &str = "├── ";
/// Connector for the last entry of a directory.
pub const LAST_CHILD: &str = "└── ";
/// Padding under an entry that still has siblings coming.
pub const CONTINUATION: &str = "│   ";
/// Padding under the last entry of a directory.
pub const BLANK: &str = "    ";

/// Formats one tree line: the inherited padding, the connector, then the name.
pub(crate) fn render_line(padding: &str, is_last: bool, name: &str) -> String {
    let connector = if is_last { LAST_CHILD } else { MID_CHILD };
    format!("{}{}{}", padding, connector, name)
}

/// Builds the padding used for the children of an entry.
///
/// A vertical bar is carried down only if the entry was not the last child,
/// i.e. when there is still a sibling line to come below this column.
pub(crate) fn child_padding(padding: &str, is_last: bool) -> String {
    let extension = if is_last { BLANK } else { CONTINUATION };
    let mut next = String::with_capacity(padding.len() + extension.len());
    next.push_str(padding);
    next.push_str(extension);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_connectors() {
        assert_eq!(render_line("", false, "Cargo.toml"), "├── Cargo.toml");
        assert_eq!(render_line("", true, "src"), "└── src");
        assert_eq!(render_line("│   ", true, "lib.rs"), "│   └── lib.rs");
    }

    #[test]
    fn test_child_padding_nesting() {
        let level1 = child_padding("", false);
        assert_eq!(level1, "│   ");
        let level2 = child_padding(&level1, true);
        assert_eq!(level2, "│       ");
        assert_eq!(render_line(&level2, true, "deep.txt"), "│       └── deep.txt");
    }
}
