//! Per-test-file namespace directories beneath the root.

use crate::core::config::AllocatorConfig;
use crate::core::models::RootDirectory;
use crate::core::naming::namespace_name;
use crate::core::root::resolve_root;
use crate::error::{Error, Result};
use crate::infra::{diagnostics, fs as infra_fs};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Prepares `<root>/<namespace_name(identity)>` for a fresh run.
///
/// A missing directory is created. A directory left by an earlier run keeps
/// its path but loses all of its contents, so anything still holding the path
/// keeps pointing at a valid, empty directory.
///
/// 为新一轮运行准备 `<root>/<namespace_name(identity)>`。
/// 目录不存在时创建；若为上一轮运行遗留，则保留目录本身并清空其内容。
pub fn resolve_namespace(root: &Path, identity: &str) -> Result<PathBuf> {
    let namespace = root.join(namespace_name(identity));

    if infra_fs::is_directory(&namespace) {
        infra_fs::purge_contents(&namespace)?;
        return Ok(namespace);
    }

    match fs::create_dir(&namespace) {
        Ok(()) => Ok(namespace),
        // Another run of the same identity got there first; converge on its directory.
        Err(e) if e.kind() == ErrorKind::AlreadyExists && infra_fs::is_directory(&namespace) => {
            infra_fs::purge_contents(&namespace)?;
            Ok(namespace)
        }
        Err(e) => Err(Error::io("create namespace directory", namespace, e)),
    }
}

/// Prepares the namespace beneath an already resolved `root`.
///
/// A parallel test file that passes may remove the shared, now empty, root
/// between our root resolution and the namespace `create_dir`. When the
/// namespace step fails with `NotFound`, the root is resolved once more and
/// the namespace retried; a second failure is fatal.
///
/// 在已解析的 `root` 下准备命名空间目录。若根目录在此期间被并行测试删除，
/// 则重新解析一次根目录后重试。
pub fn resolve_layout(
    config: &AllocatorConfig,
    root: RootDirectory,
) -> Result<(RootDirectory, PathBuf)> {
    match resolve_namespace(root.path(), &config.test_identity) {
        Ok(namespace) => Ok((root, namespace)),
        Err(e) if e.is_not_found() => {
            diagnostics::warn_root_vanished(root.path());
            let root = resolve_root(config)?;
            let namespace = resolve_namespace(root.path(), &config.test_identity)?;
            Ok((root, namespace))
        }
        Err(e) => Err(e),
    }
}
