// --- FILE: treefeeder-lib/src/processing.rs ---

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};

/// Prefix of the placeholder recorded in place of content that could not be read.
pub const READ_ERROR_PREFIX: &str = "Error reading file: ";

/// Reads a file's full UTF-8 content for its file record.
///
/// Never fails: an open error, a read error or invalid UTF-8 is turned into an
/// `Error reading file: <details>` placeholder so the walk can carry on.
/// The file handle only lives for the duration of this call.
pub(crate) fn read_file_content(file_path: &Path) -> String {
    debug!("Reading file content for: {:?}", file_path);
    match read_utf8(file_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read {:?}, recording placeholder: {}", file_path, e);
            format!("{}{}", READ_ERROR_PREFIX, e)
        }
    }
}

fn read_utf8(file_path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(file_path)?;
    let mut reader = BufReader::new(file);
    let mut content = String::new();
    // Fails with ErrorKind::InvalidData on non-UTF8 input.
    reader.read_to_string(&mut content)?;
    Ok(content)
}
