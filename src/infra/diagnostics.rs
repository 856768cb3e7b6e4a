//! Console diagnostics for conditions that are worth a warning but never fatal.

use crate::core::models::Cleanup;
use colored::*;
use std::path::Path;

/// Prints a warning that another process created the persistent root between
/// our existence check and our `create_dir`. This usually means several test
/// binaries were started in parallel from the same directory.
///
/// 打印警告：在存在性检查与 `create_dir` 之间，另一个进程创建了持久根目录。
/// 这通常意味着多个测试程序在同一目录中并行启动。
pub fn warn_root_race(root: &Path, fallback: &Path) {
    eprintln!(
        "{} {} was created concurrently by another process; using {} instead",
        "warning:".yellow().bold(),
        root.display(),
        fallback.display().to_string().cyan()
    );
}

/// Prints a warning that the root disappeared before the namespace could be
/// created in it, usually removed by a parallel test file that finished first.
pub fn warn_root_vanished(root: &Path) {
    eprintln!(
        "{} {} was removed by another process; resolving the root again",
        "warning:".yellow().bold(),
        root.display()
    );
}

/// Tells the user what finalization did with the directories of a failed run.
pub fn note_cleanup(cleanup: &Cleanup) {
    eprintln!("{} temporary directories {}", "note:".cyan().bold(), cleanup);
}
