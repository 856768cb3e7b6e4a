//! # Error Module / 错误模块
//!
//! Errors raised while resolving the root, preparing the namespace or
//! allocating a directory. All of them are fatal for the calling test file.
//!
//! 解析根目录、准备命名空间目录或分配目录时产生的错误。
//! 对调用它的测试文件而言，这些错误都是致命的。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The conventional root location is occupied by something that is not a directory.
    /// 约定的根目录位置被一个非目录的条目占用。
    #[error("Expected a directory at {}, found a non-directory", path.display())]
    Configuration { path: PathBuf },

    /// A filesystem operation whose success is required for isolation failed.
    /// 一个必须成功的文件系统操作失败了。
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The directory allocator has already been finalized")]
    Finished,
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Whether this is an I/O failure caused by a missing path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
