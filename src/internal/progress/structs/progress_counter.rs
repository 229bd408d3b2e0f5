use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::internal::progress::structs::TransferProgress;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

/// 各分段任务共享的进度计数器。
///
/// 累加走 `AtomicU64::fetch_add`，不会丢失增量；快照通过响应式属性发布，
/// 并发发布时只保留更大的值，监听者看到的进度单调不减。
#[derive(Debug, Clone)]
pub struct ProgressCounter {
    bytes_done: Arc<AtomicU64>,
    state: UnlockReactiveProperty<TransferProgress>,
}

impl Default for ProgressCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self {
            bytes_done: Arc::new(AtomicU64::new(0)),
            state: UnlockReactiveProperty::new(TransferProgress::default()),
        }
    }

    /// 清零并设置总大小（探测完成后调用）。
    pub fn reset(&self, total: u64) {
        self.bytes_done.store(0, Ordering::SeqCst);
        self.state.update(TransferProgress {
            bytes_done: 0,
            total: Some(total),
        });
    }

    /// 累加 `len` 字节，返回累加后的总数。
    pub fn add(&self, len: u64) -> u64 {
        if len == 0 {
            return self.current();
        }
        let current = self.bytes_done.fetch_add(len, Ordering::Relaxed) + len;
        self.state.update_field(|p| {
            if current > p.bytes_done {
                p.bytes_done = current;
                true
            } else {
                false
            }
        });
        current
    }

    /// 当前累计字节数。
    pub fn current(&self) -> u64 {
        self.bytes_done.load(Ordering::Relaxed)
    }

    /// 可监听的进度快照句柄。
    pub fn state(&self) -> UnlockReactiveProperty<TransferProgress> {
        self.state.clone()
    }
}
