use crate::constants::STDIN_MANIFEST;
use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

/// Reads one source file as UTF-8. The handle is closed before this returns.
pub fn read_source(path: &Path) -> io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// One path per line; blank lines and `#` comments are skipped.
pub fn parse_manifest(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect()
}

/// Loads source paths from a manifest file, or from stdin when `path` is "-".
pub fn load_manifest(path: &Path) -> Result<Vec<PathBuf>> {
    let text = if path.as_os_str() == STDIN_MANIFEST {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read manifest from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?
    };
    let paths = parse_manifest(&text);
    tracing::debug!("manifest {} listed {} paths", path.display(), paths.len());
    Ok(paths)
}
