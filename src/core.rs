//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the allocator:
//! configuration, naming rules, root and namespace resolution,
//! directory allocation and the outcome-conditioned cleanup.
//!
//! 此模块包含分配器的核心功能：
//! 配置、命名规则、根目录与命名空间解析、目录分配以及按测试结果进行的清理。

pub mod allocator;
pub mod config;
pub mod models;
pub mod namespace;
pub mod naming;
pub mod outcome;
pub mod root;

// Re-exports
pub use allocator::DirectoryAllocator;
pub use config::AllocatorConfig;
pub use models::{Cleanup, Outcome, RootDirectory, SkipReason};
