//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the allocator: the
//! resolved root, the test outcome read at finalization and the report of
//! what cleanup did.
//!
//! 此模块定义分配器共用的数据结构：解析出的根目录、
//! 终结时读取的测试结果以及清理操作的报告。

use std::fmt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The top-level container for every directory handed out by one allocator.
///
/// 一个分配器所分配的全部目录的顶层容器。
#[derive(Debug)]
pub enum RootDirectory {
    /// A fixed, project-relative directory that outlives the process when tests fail.
    /// 项目内的固定目录，测试失败时在进程结束后保留。
    Persistent(PathBuf),
    /// A system temporary directory owned by this process, removed unconditionally.
    /// 由本进程独占的系统临时目录，无论结果如何都会被删除。
    Ephemeral(TempDir),
}

impl RootDirectory {
    pub fn path(&self) -> &Path {
        match self {
            RootDirectory::Persistent(path) => path,
            RootDirectory::Ephemeral(dir) => dir.path(),
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, RootDirectory::Ephemeral(_))
    }
}

/// The test outcome as published by the surrounding test framework.
///
/// 由外层测试框架发布的测试结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every test in the file passed (exit status zero).
    Success,
    /// At least one test failed; carries the non-zero exit status.
    Failure(i32),
    /// The framework never published a status. Treated like a failure.
    Unknown,
}

impl Outcome {
    /// Maps a pending exit status to an outcome.
    pub fn from_status(status: Option<i32>) -> Self {
        match status {
            Some(0) => Outcome::Success,
            Some(code) => Outcome::Failure(code),
            None => Outcome::Unknown,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Why finalization did not touch the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No directory was ever requested, so nothing was created.
    NeverUsed,
    /// Finalization ran in a process other than the one that created the allocator.
    ForeignProcess,
    /// Finalization already ran once.
    AlreadyFinished,
}

/// What finalization did with the directories.
///
/// 终结阶段对目录所做的处理。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleanup {
    /// The namespace was deleted after a successful run.
    /// `root_removed` is false when other test files still have directories in the root.
    Removed { namespace: PathBuf, root_removed: bool },
    /// The run did not succeed; the namespace is left for inspection.
    Preserved { namespace: PathBuf },
    /// The ephemeral root and everything in it was dropped.
    Discarded,
    /// Nothing was done.
    Skipped(SkipReason),
}

impl fmt::Display for Cleanup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cleanup::Removed { namespace, .. } => write!(f, "removed {}", namespace.display()),
            Cleanup::Preserved { namespace } => {
                write!(f, "kept in {} for inspection", namespace.display())
            }
            Cleanup::Discarded => write!(f, "discarded temporary root"),
            Cleanup::Skipped(reason) => write!(f, "skipped ({:?})", reason),
        }
    }
}
