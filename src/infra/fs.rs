//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the filesystem primitives the allocator is built on:
//! writability checks, self-deleting temporary roots, purging a directory's
//! contents and best-effort removal during cleanup.
//!
//! 此模块提供分配器所依赖的文件系统基础操作：
//! 可写性探测、自删除的临时根目录、清空目录内容以及清理阶段的尽力删除。

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Checks whether new entries can be created inside `dir`.
///
/// The check is a real write: an anonymous temporary file is created in the
/// directory and dropped immediately. A missing directory is not writable.
///
/// # Arguments
/// * `dir` - Directory to check
///
/// # Returns
/// `true` if a file could be created inside `dir`
pub fn is_writable(dir: &Path) -> bool {
    is_directory(dir) && tempfile::tempfile_in(dir).is_ok()
}

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Creates a uniquely named directory in the system temporary location.
/// The returned `TempDir` deletes the directory and everything in it when
/// closed or dropped.
///
/// 在系统临时目录中创建一个唯一命名的目录。
/// 返回的 `TempDir` 在关闭或被丢弃时会删除该目录及其全部内容。
pub fn create_ephemeral_root(prefix: &str) -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .map_err(|e| Error::io("create temporary root in", std::env::temp_dir(), e))
}

/// Recursively removes everything inside `dir` while keeping `dir` itself.
///
/// Entries are classified with `symlink_metadata`, so symlinks (dangling or
/// not) are unlinked rather than followed. Real directories go through
/// `fs_extra`.
///
/// # Arguments
/// * `dir` - Directory whose entries should be removed
pub fn purge_contents(dir: &Path) -> Result<()> {
    let entries = fs::read_dir(dir)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.path()))
                .collect::<io::Result<Vec<PathBuf>>>()
        })
        .map_err(|e| Error::io("read", dir, e))?;

    let mut directories = Vec::new();
    for entry in entries {
        let meta = fs::symlink_metadata(&entry).map_err(|e| Error::io("inspect", &entry, e))?;
        if meta.is_dir() {
            directories.push(entry);
        } else {
            fs::remove_file(&entry).map_err(|e| Error::io("remove", &entry, e))?;
        }
    }

    if directories.is_empty() {
        return Ok(());
    }

    fs_extra::remove_items(&directories)
        .map_err(|e| Error::io("purge", dir, io::Error::other(e)))
}

/// Removes a directory tree, ignoring any failure.
pub fn remove_tree_quietly(path: &Path) {
    let _ = fs::remove_dir_all(path);
}

/// Removes `path` only if it is an empty directory.
///
/// # Returns
/// `true` if the directory was removed
pub fn remove_if_empty(path: &Path) -> bool {
    fs::remove_dir(path).is_ok()
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| Error::io("resolve path", path, e))
}
