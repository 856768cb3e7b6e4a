//! # Outcome Indicator Module / 测试结果指示器模块
//!
//! The process-wide pending exit status. The test framework publishes it once
//! all tests have run; the allocator only ever reads it.
//!
//! 进程范围内待定的退出状态。测试框架在全部测试运行后发布该值；
//! 分配器只读取它。

use crate::core::models::Outcome;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

static PUBLISHED: AtomicBool = AtomicBool::new(false);
static EXIT_STATUS: AtomicI32 = AtomicI32::new(0);

/// Publishes the pending exit status of the test process.
/// Called by the test framework collaborator, never by the allocator.
///
/// 发布测试进程待定的退出状态。由测试框架调用，分配器从不调用。
pub fn set_exit_status(code: i32) {
    EXIT_STATUS.store(code, Ordering::SeqCst);
    PUBLISHED.store(true, Ordering::SeqCst);
}

/// The published exit status, or `None` if nothing was published yet.
pub fn exit_status() -> Option<i32> {
    if PUBLISHED.load(Ordering::SeqCst) {
        Some(EXIT_STATUS.load(Ordering::SeqCst))
    } else {
        None
    }
}

/// The outcome corresponding to the currently published exit status.
pub fn current_outcome() -> Outcome {
    Outcome::from_status(exit_status())
}
