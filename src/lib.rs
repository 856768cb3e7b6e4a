//! # Test Tempdir Library / 测试临时目录库
//!
//! Per-test-file temporary directories that are deleted when every test in
//! the file passes and kept for post-mortem inspection when any test fails.
//!
//! 按测试文件分配的临时目录：当文件中的所有测试都通过时自动删除，
//! 任一测试失败时保留以便事后检查。
//!
//! ## Layout / 目录布局
//!
//! ```text
//! ./tmp/<test-file-id>/<label>_<n>/                        (persistent root)
//! <system-temp>/test-tempdir-XXXX/<test-file-id>/<label>_<n>/  (fallback)
//! ```
//!
//! The persistent root `./tmp` is used when it is (or can be made) a
//! writable directory; otherwise a system temporary directory is used and
//! always removed at the end, whatever the outcome.
//!
//! ## Modules / 模块
//!
//! - `core` - Allocator, naming rules, root/namespace resolution and outcome handling
//! - `infra` - File system operations and console diagnostics
//! - `harness` - Process-wide entry points used directly by test files
//! - `error` - Error types
//!
//! - `core` - 分配器、命名规则、根目录/命名空间解析以及测试结果处理
//! - `infra` - 文件系统操作和控制台诊断
//! - `harness` - 测试文件直接使用的进程级入口
//! - `error` - 错误类型

pub mod core;
pub mod error;
pub mod harness;
pub mod infra;

// Re-export commonly used items
pub use crate::core::outcome::{exit_status, set_exit_status};
pub use crate::core::{AllocatorConfig, Cleanup, DirectoryAllocator, Outcome, SkipReason};
pub use error::{Error, Result};
pub use harness::{finish, root_dir, run, tempdir, try_tempdir};
