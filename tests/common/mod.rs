// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use test_tempdir::{AllocatorConfig, DirectoryAllocator};

/// Identity used by most tests, mirroring a conventional `t/foo.t` test file.
pub const TEST_IDENTITY: &str = "t/foo.t";

/// Creates an empty sandbox that plays the role of a project directory.
pub fn setup_project_dir() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Builds an allocator whose persistent root would live in `base/tmp`.
pub fn allocator_in(base: &Path, identity: &str) -> DirectoryAllocator {
    DirectoryAllocator::new(
        AllocatorConfig::new()
            .base_dir(base)
            .test_identity(identity),
    )
}

/// The persistent root an allocator built with [`allocator_in`] uses.
pub fn persistent_root(base: &Path) -> PathBuf {
    fs::canonicalize(base)
        .expect("Failed to canonicalize project dir")
        .join("tmp")
}

/// Drops a small file into `dir` so tests can check whether it survived.
pub fn write_marker(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "marker").expect("Failed to write marker file");
    path
}
