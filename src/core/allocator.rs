//! # Directory Allocator Module / 目录分配器模块
//!
//! The allocator hands out uniquely named directories inside a per-test-file
//! namespace and, once the test outcome is known, either deletes that
//! namespace or leaves it behind for inspection.
//!
//! 分配器在每个测试文件独有的命名空间目录中分配唯一命名的目录，
//! 并在测试结果确定后删除该命名空间或将其保留以供检查。

use crate::core::config::AllocatorConfig;
use crate::core::models::{Cleanup, Outcome, RootDirectory, SkipReason};
use crate::core::namespace::resolve_layout;
use crate::core::naming::{allocation_name, sanitize_label};
use crate::core::root::resolve_root;
use crate::error::{Error, Result};
use crate::infra::fs as infra_fs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{env, fs, mem};

#[derive(Debug)]
enum State {
    /// Nothing has been requested yet; no directory exists on disk.
    Unresolved,
    /// Root and namespace are resolved and the finalizer is armed.
    Resolved {
        root: RootDirectory,
        namespace: PathBuf,
    },
    Finished,
}

/// Allocates per-test-file temporary directories whose survival depends on
/// the test outcome.
///
/// The root and namespace are resolved lazily on the first call to
/// [`tempdir`](Self::tempdir) and reused for the lifetime of the allocator.
///
/// 按测试文件分配临时目录，目录是否保留取决于测试结果。
/// 根目录和命名空间目录在第一次调用 [`tempdir`](Self::tempdir) 时惰性解析，
/// 并在分配器的整个生命周期内复用。
///
/// # Examples
/// ```no_run
/// use test_tempdir::{AllocatorConfig, DirectoryAllocator, Outcome};
///
/// let mut allocator = DirectoryAllocator::new(AllocatorConfig::new().test_identity("t/foo.t"));
/// let dir = allocator.tempdir(Some("label")).unwrap();
/// assert!(dir.ends_with("tmp/t_foo_t/label_1"));
/// allocator.finish(Outcome::Success);
/// assert!(!dir.exists());
/// ```
#[derive(Debug)]
pub struct DirectoryAllocator {
    config: AllocatorConfig,
    process_id: u32,
    original_cwd: Option<PathBuf>,
    counters: HashMap<String, u32>,
    state: State,
}

impl DirectoryAllocator {
    /// Creates an allocator. Nothing touches the filesystem until the first
    /// directory is requested; the process id and working directory are captured now.
    pub fn new(config: AllocatorConfig) -> Self {
        Self {
            config,
            process_id: std::process::id(),
            original_cwd: env::current_dir().ok(),
            counters: HashMap::new(),
            state: State::Unresolved,
        }
    }

    /// The resolved root, or `None` before the first allocation and after finalization.
    pub fn root_dir(&self) -> Option<&Path> {
        match &self.state {
            State::Resolved { root, .. } => Some(root.path()),
            _ => None,
        }
    }

    /// The resolved namespace directory, if any.
    pub fn namespace_dir(&self) -> Option<&Path> {
        match &self.state {
            State::Resolved { namespace, .. } => Some(namespace),
            _ => None,
        }
    }

    /// Whether the root fell back to a system temporary directory.
    pub fn is_ephemeral(&self) -> bool {
        matches!(&self.state, State::Resolved { root, .. } if root.is_ephemeral())
    }

    /// Creates a new, empty directory named `<label>_<n>` in the namespace.
    ///
    /// `label` defaults to `"default"` when `None` or empty and is sanitized
    /// with [`sanitize_label`]. `n` starts at 1 for every label and increases
    /// by one with each call.
    ///
    /// # Arguments
    /// * `label` - Optional grouping name for related directories
    ///
    /// # Returns
    /// The canonicalized absolute path of the new directory.
    ///
    /// # Errors
    /// * `Error::Configuration` if the root location is occupied by a file
    /// * `Error::Io` if the root, namespace or directory could not be created
    /// * `Error::Finished` if [`finish`](Self::finish) has already run
    pub fn tempdir(&mut self, label: Option<&str>) -> Result<PathBuf> {
        let namespace = self.ensure_resolved()?.to_path_buf();

        let label = sanitize_label(label);
        let count = self.counters.entry(label.clone()).or_insert(0);
        *count += 1;

        let dir = namespace.join(allocation_name(&label, *count));
        fs::create_dir(&dir).map_err(|e| Error::io("create directory", &dir, e))?;
        infra_fs::absolute_path(&dir)
    }

    fn ensure_resolved(&mut self) -> Result<&Path> {
        if let State::Unresolved = self.state {
            let root = resolve_root(&self.config)?;
            let (root, namespace) = resolve_layout(&self.config, root)?;
            self.state = State::Resolved { root, namespace };
        }

        match &self.state {
            State::Resolved { namespace, .. } => Ok(namespace),
            _ => Err(Error::Finished),
        }
    }

    /// Runs the exit-time cleanup for the given outcome. Only the first call
    /// has any effect, and only in the process that created the allocator.
    ///
    /// * Persistent root, [`Outcome::Success`]: the working directory is
    ///   restored, the namespace is deleted and the root is removed if empty.
    /// * Persistent root, any other outcome: nothing is deleted.
    /// * Ephemeral root: the whole root is deleted regardless of outcome.
    ///
    /// Failures while deleting are ignored; a root that still holds other
    /// test files' namespaces is expected to stay.
    ///
    /// 执行退出时的清理。只有第一次调用生效，且仅在创建分配器的进程中生效。
    /// 删除过程中的失败会被忽略。
    pub fn finish(&mut self, outcome: Outcome) -> Cleanup {
        if self.process_id != std::process::id() {
            return Cleanup::Skipped(SkipReason::ForeignProcess);
        }

        match mem::replace(&mut self.state, State::Finished) {
            State::Finished => Cleanup::Skipped(SkipReason::AlreadyFinished),
            State::Unresolved => Cleanup::Skipped(SkipReason::NeverUsed),
            State::Resolved {
                root: RootDirectory::Ephemeral(dir),
                ..
            } => {
                self.restore_cwd();
                let _ = dir.close();
                Cleanup::Discarded
            }
            State::Resolved {
                root: RootDirectory::Persistent(root),
                namespace,
            } => {
                if !outcome.is_success() {
                    return Cleanup::Preserved { namespace };
                }
                self.restore_cwd();
                infra_fs::remove_tree_quietly(&namespace);
                let root_removed = infra_fs::remove_if_empty(&root);
                Cleanup::Removed {
                    namespace,
                    root_removed,
                }
            }
        }
    }

    // Tests may chdir into an allocated directory; removing it from inside
    // fails on some platforms.
    fn restore_cwd(&self) {
        if let Some(cwd) = &self.original_cwd {
            let _ = env::set_current_dir(cwd);
        }
    }
}
