//! # Root Resolution Module / 根目录解析模块
//!
//! Decides where an allocator keeps its directories: the conventional
//! `<base>/tmp` when it can be used, a self-deleting system temporary
//! directory otherwise.
//!
//! 决定分配器在何处存放目录：可用时使用约定的 `<base>/tmp`，
//! 否则使用会自动删除的系统临时目录。

use crate::core::config::AllocatorConfig;
use crate::core::models::RootDirectory;
use crate::error::{Error, Result};
use crate::infra::{diagnostics, fs as infra_fs};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves the root directory for an allocator.
///
/// # Arguments
/// * `config` - Supplies the base directory, root name and ephemeral prefix
///
/// # Returns
/// * `Ok(RootDirectory::Persistent)` if `<base>/<root_name>` exists (or could be created) and is writable
/// * `Ok(RootDirectory::Ephemeral)` if that location can't be used
/// * `Err(Error::Configuration)` if the location exists but is not a directory
/// * `Err(Error::Io)` if creating the root failed for any reason other than a lost race
///
/// 解析分配器的根目录。
pub fn resolve_root(config: &AllocatorConfig) -> Result<RootDirectory> {
    let candidate = config.root_candidate();

    match fs::metadata(&candidate) {
        Ok(meta) if !meta.is_dir() => return Err(Error::Configuration { path: candidate }),
        Ok(_) => {
            if infra_fs::is_writable(&candidate) {
                return Ok(RootDirectory::Persistent(infra_fs::absolute_path(&candidate)?));
            }
            return ephemeral_root(config);
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io("inspect", candidate, e)),
    }

    if !infra_fs::is_writable(&config.base_dir) {
        return ephemeral_root(config);
    }

    match claim_persistent_root(&candidate)? {
        Some(path) => Ok(RootDirectory::Persistent(path)),
        None => {
            let root = ephemeral_root(config)?;
            diagnostics::warn_root_race(&candidate, root.path());
            Ok(root)
        }
    }
}

/// Creates the persistent root at `candidate`.
///
/// Returns `Ok(None)` when the directory appeared between the caller's
/// existence check and the `create_dir` call, which means a parallel process
/// won the race. The caller falls back to an ephemeral root in that case.
///
/// 在 `candidate` 处创建持久根目录。
/// 若目录在存在性检查之后被其他进程抢先创建，则返回 `Ok(None)`。
pub fn claim_persistent_root(candidate: &Path) -> Result<Option<PathBuf>> {
    match fs::create_dir(candidate) {
        Ok(()) => Ok(Some(infra_fs::absolute_path(candidate)?)),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(None),
        Err(e) => Err(Error::io("create root directory", candidate, e)),
    }
}

fn ephemeral_root(config: &AllocatorConfig) -> Result<RootDirectory> {
    infra_fs::create_ephemeral_root(&config.ephemeral_prefix).map(RootDirectory::Ephemeral)
}
