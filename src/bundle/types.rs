use crate::bundle::{gather, header};
use std::path::{Path, PathBuf};

/// What follows a block's header: the file text, or why it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    Contents(String),
    Unreadable(String),
}

/// One source path and the body written under its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub path: PathBuf,
    pub body: BlockBody,
}

impl Block {
    /// Reads `path` once. Any failure becomes an `Unreadable` body.
    pub fn read(path: &Path) -> Self {
        let body = match gather::read_source(path) {
            Ok(contents) => BlockBody::Contents(contents),
            Err(e) => BlockBody::Unreadable(e.to_string()),
        };
        Block {
            path: path.to_path_buf(),
            body,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self.body, BlockBody::Unreadable(_))
    }

    /// Header followed by the body text, exactly as it lands in the bundle.
    pub fn render(&self) -> String {
        let mut s = header::format_header(&self.path);
        match &self.body {
            BlockBody::Contents(contents) => s.push_str(contents),
            BlockBody::Unreadable(reason) => s.push_str(&header::format_error_marker(reason)),
        }
        s
    }
}

/// Summary of one bundling run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleReport {
    pub blocks: usize,
    /// Sources that got an error marker, in input order.
    pub unreadable: Vec<PathBuf>,
    pub bytes_written: u64,
    /// Sum of per-block token counts; close to, not exactly, the whole-file count.
    pub tokens: usize,
}

impl BundleReport {
    pub fn readable(&self) -> usize {
        self.blocks - self.unreadable.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_contents_block() {
        let block = Block {
            path: PathBuf::from("a.txt"),
            body: BlockBody::Contents("hello".into()),
        };
        assert_eq!(block.render(), "\n\n=== File: a.txt ===\nhello");
        assert!(!block.is_unreadable());
    }

    #[test]
    fn render_unreadable_block() {
        let block = Block {
            path: PathBuf::from("gone.txt"),
            body: BlockBody::Unreadable("No such file or directory (os error 2)".into()),
        };
        assert_eq!(
            block.render(),
            "\n\n=== File: gone.txt ===\n[Error reading file]: No such file or directory (os error 2)"
        );
        assert!(block.is_unreadable());
    }

    #[test]
    fn read_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let block = Block::read(&dir.path().join("missing.txt"));
        assert!(block.is_unreadable());
    }
}
