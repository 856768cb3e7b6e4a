//! # Configuration Module / 配置模块
//!
//! Settings that decide where the allocator places its directories.
//! There is no file or environment-variable surface: a test file
//! either uses the defaults or builds an `AllocatorConfig` in code.
//!
//! 决定分配器在何处放置目录的设置。
//! 不提供文件或环境变量形式的配置：测试文件要么使用默认值，
//! 要么在代码中构建 `AllocatorConfig`。

use std::env;
use std::path::{Path, PathBuf};

/// Name of the persistent root created beneath the base directory.
pub const DEFAULT_ROOT_NAME: &str = "tmp";

/// Prefix for temporary roots created in the system temporary location.
pub const EPHEMERAL_PREFIX: &str = "test-tempdir-";

/// Where and under which identity a `DirectoryAllocator` creates its directories.
///
/// 分配器创建目录的位置以及所使用的测试文件标识。
#[derive(Debug, Clone)]
pub struct AllocatorConfig {
    /// Directory the persistent root is created in. Also the working directory
    /// restored before cleanup.
    /// 持久根目录所在的目录，同时也是清理前恢复的工作目录。
    pub base_dir: PathBuf,
    /// Name of the persistent root inside `base_dir`.
    /// `base_dir` 中持久根目录的名称。
    pub root_name: String,
    /// Identity of the running test file, used to derive the namespace name.
    /// 当前测试文件的标识，用于推导命名空间目录名。
    pub test_identity: String,
    /// Prefix used when falling back to a system temporary root.
    pub ephemeral_prefix: String,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        let base_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let test_identity = program_identity(&base_dir);
        Self {
            base_dir,
            root_name: DEFAULT_ROOT_NAME.to_string(),
            test_identity,
            ephemeral_prefix: EPHEMERAL_PREFIX.to_string(),
        }
    }
}

impl AllocatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.base_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    pub fn test_identity(mut self, identity: impl Into<String>) -> Self {
        self.test_identity = identity.into();
        self
    }

    pub fn ephemeral_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ephemeral_prefix = prefix.into();
        self
    }

    /// The conventional persistent root: `<base_dir>/<root_name>`.
    pub fn root_candidate(&self) -> PathBuf {
        self.base_dir.join(&self.root_name)
    }
}

/// Returns the running program's path as the process sees it (`argv[0]`),
/// relative to `base_dir` when the program lives beneath it.
///
/// 返回进程所见的当前程序路径（`argv[0]`），
/// 若程序位于 `base_dir` 之下，则返回相对路径。
pub fn program_identity(base_dir: &Path) -> String {
    let program = env::args_os()
        .next()
        .map(PathBuf::from)
        .or_else(|| env::current_exe().ok())
        .unwrap_or_default();

    identity_relative_to(&program, base_dir)
}

/// Renders `program` relative to `base_dir` when it lies beneath it, and
/// whole otherwise.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use test_tempdir::core::config::identity_relative_to;
///
/// assert_eq!(identity_relative_to(Path::new("/proj/t/foo.t"), Path::new("/proj")), "t/foo.t");
/// assert_eq!(identity_relative_to(Path::new("/bin/foo"), Path::new("/proj")), "/bin/foo");
/// ```
pub fn identity_relative_to(program: &Path, base_dir: &Path) -> String {
    let relative = program.strip_prefix(base_dir).unwrap_or(program);
    relative.to_string_lossy().into_owned()
}
