#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

/// Builds a fixture tree:
/// root/
///   src/hello.rs
///   README.md
///   bin/binary.dat  (non-UTF8)
///   empty.txt
pub fn basic_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("src/hello.rs")
        .write_str("fn main() { println!(\"hello\"); }\n")
        .unwrap();
    td.child("README.md").write_str("# readme\n").unwrap();
    td.child("bin/binary.dat")
        .write_binary(&[0xffu8, 0xfe, 0x00, 0x80])
        .unwrap();
    td.child("empty.txt").touch().unwrap();
    td
}

/// The bytes one block contributes to a bundle.
pub fn block(
    path: &str,
    contents: &str,
) -> String {
    format!("\n\n=== File: {path} ===\n{contents}")
}
