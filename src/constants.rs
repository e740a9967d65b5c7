// Literals that make up the bundle format
pub const HEADER_PREFIX: &str = "\n\n=== File: ";
pub const HEADER_SUFFIX: &str = " ===\n";
pub const ERROR_MARKER: &str = "[Error reading file]";
pub const STDIN_MANIFEST: &str = "-";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";
