//! Common test utilities

#![allow(dead_code)]

use gmake::runner::{Context, Platform};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a gMake script
pub fn create_test_script(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let script_path = temp_dir.path().join("gMake");
    fs::write(&script_path, content).unwrap();
    (temp_dir, script_path)
}

/// A capturing POSIX context rooted in `dir`
pub fn capturing_context(dir: &TempDir) -> Context {
    Context::new()
        .with_platform(Platform::Posix)
        .with_working_dir(dir.path().to_path_buf())
        .capturing()
}
