//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the allocator,
//! namely file system operations and console diagnostics.
//!
//! 此模块为分配器提供基础设施服务，
//! 即文件系统操作和控制台诊断输出。

pub mod diagnostics;
pub mod fs;
