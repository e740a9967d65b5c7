use crate::constants::{ERROR_MARKER, HEADER_PREFIX, HEADER_SUFFIX};
use std::{fmt::Display, path::Path};

/// Builds the line that opens every block: `\n\n=== File: <path> ===\n`.
pub fn format_header(path: &Path) -> String {
    format!("{HEADER_PREFIX}{}{HEADER_SUFFIX}", path.display())
}

/// Text written in place of a source's contents when it could not be read.
pub fn format_error_marker(reason: impl Display) -> String {
    format!("{ERROR_MARKER}: {reason}")
}
