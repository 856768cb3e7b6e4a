//! # Process-wide Harness Module / 进程级入口模块
//!
//! The entry points a test file uses directly. They share one lazily built
//! [`DirectoryAllocator`] for the whole process.
//!
//! Rust offers no ordered exit hooks, so cleanup is an explicit step: either
//! call [`finish`] after publishing the exit status with
//! [`set_exit_status`](crate::set_exit_status), or let [`run`] do both for a
//! `harness = false` test file.
//!
//! 测试文件直接使用的入口函数，整个进程共享一个惰性构建的 [`DirectoryAllocator`]。
//! Rust 没有有序的退出钩子，因此清理需要显式执行：发布退出状态后调用 [`finish`]，
//! 或者在 `harness = false` 的测试文件中使用 [`run`] 一并完成。

use crate::core::allocator::DirectoryAllocator;
use crate::core::config::AllocatorConfig;
use crate::core::models::Cleanup;
use crate::core::outcome::{current_outcome, set_exit_status};
use crate::error::Result;
use crate::infra::diagnostics;
use once_cell::sync::Lazy;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Exit status reported when the body passed to [`run`] panics, matching libtest.
pub const PANIC_EXIT_STATUS: i32 = 101;

static ALLOCATOR: Lazy<Mutex<DirectoryAllocator>> =
    Lazy::new(|| Mutex::new(DirectoryAllocator::new(AllocatorConfig::default())));

fn allocator() -> MutexGuard<'static, DirectoryAllocator> {
    ALLOCATOR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Creates a fresh directory for this test file and returns its absolute path.
///
/// See [`DirectoryAllocator::tempdir`] for naming. Any failure is fatal for
/// the calling test, so this panics with the error message.
///
/// 为当前测试文件创建一个新目录并返回其绝对路径。任何失败都会导致 panic。
///
/// # Examples
/// ```no_run
/// let first = test_tempdir::tempdir(None);
/// let second = test_tempdir::tempdir(Some("fixtures"));
/// assert!(first.ends_with("default_1"));
/// assert!(second.ends_with("fixtures_1"));
/// ```
pub fn tempdir(label: Option<&str>) -> PathBuf {
    try_tempdir(label).unwrap_or_else(|e| panic!("{}", e))
}

/// Like [`tempdir`], but returns the error instead of panicking.
pub fn try_tempdir(label: Option<&str>) -> Result<PathBuf> {
    allocator().tempdir(label)
}

/// The resolved root directory of the process-wide allocator.
///
/// Intended for this crate's own tests; `None` until the first directory
/// has been requested.
#[doc(hidden)]
pub fn root_dir() -> Option<PathBuf> {
    allocator().root_dir().map(PathBuf::from)
}

/// Finalizes the process-wide allocator using the published exit status.
///
/// Must run after the test framework has published its final status; an
/// unpublished status counts as a failure and keeps the directories.
///
/// 使用已发布的退出状态终结进程级分配器。
/// 必须在测试框架发布最终状态之后调用；未发布的状态视为失败，目录将被保留。
pub fn finish() -> Cleanup {
    let outcome = current_outcome();
    allocator().finish(outcome)
}

/// Runs the body of a `harness = false` test file and cleans up afterwards.
///
/// The body returns the test file's exit status (a panic counts as
/// [`PANIC_EXIT_STATUS`]). That status is published, the allocator is
/// finalized, and the status is returned as the process exit code.
///
/// 运行 `harness = false` 测试文件的主体并在之后执行清理。
///
/// # Examples
/// ```no_run
/// use std::process::ExitCode;
///
/// fn main() -> ExitCode {
///     test_tempdir::run(|| {
///         let dir = test_tempdir::tempdir(Some("data"));
///         std::fs::write(dir.join("input.txt"), "hello").unwrap();
///         0
///     })
/// }
/// ```
pub fn run<F>(body: F) -> ExitCode
where
    F: FnOnce() -> i32,
{
    let status = panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or(PANIC_EXIT_STATUS);

    set_exit_status(status);
    let cleanup = finish();
    if let Cleanup::Preserved { .. } = cleanup {
        diagnostics::note_cleanup(&cleanup);
    }

    ExitCode::from(u8::try_from(status).unwrap_or(1))
}
