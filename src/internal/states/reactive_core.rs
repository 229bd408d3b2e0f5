//! # ReactiveProperty：响应式属性内核
//!
//! 基于 [`tokio::sync::watch`] 的单值广播容器：写入方覆盖当前值，监听方异步等待变化。
//! 下载进度即由它向控制台进度条等消费者发布。
//!
//! 本模块**不对外导出**，对外统一使用 [`super::unlock_reactive::UnlockReactiveProperty`]。

use std::sync::Arc;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;
use tokio::sync::watch::Ref;
use thiserror::Error;

// ──────────────────────────── Error ────────────────────────────

/// 响应式属性统一错误类型
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 属性已被销毁（所有持有者都已释放）
    #[error("属性已被销毁")]
    Destroyed,

    /// watch 通道接收失败
    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

// ──────────────────────────── Inner ────────────────────────────

/// 内部共享状态：值发送器。最后一个属性句柄释放时广播 `None`，唤醒全部监听者。
#[derive(Debug)]
pub(crate) struct Inner<T> {
    pub(crate) sender: watch::Sender<Option<T>>,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        let _ = self.sender.send(None);
    }
}

// ──────────────────────────── ReactiveProperty ────────────────────────────

/// 响应式属性内核：new / update / update_field / get_current / watch。
///
/// 克隆只增加引用计数，所有克隆共享同一个值。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    pub(crate) inner: Arc<Inner<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    /// 创建一个新的响应式属性。
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(Some(value));
        Self {
            inner: Arc::new(Inner { sender }),
        }
    }

    /// 覆盖当前值，所有监听者都会收到通知。没有监听者时也会保存新值。
    pub fn update(&self, new_value: T) {
        self.inner.sender.send_replace(Some(new_value));
    }

    /// 在通道锁内原地修改当前值。
    ///
    /// 多个任务并发调用时，每次修改都基于最新值，不会互相覆盖。
    /// 闭包返回 `false` 表示值未变化，此时不唤醒监听者。
    pub fn update_field<F>(&self, updater: F)
    where
        F: FnOnce(&mut T) -> bool,
    {
        self.inner.sender.send_if_modified(|slot| match slot {
            Some(value) => updater(value),
            None => false,
        });
    }

    /// 获取当前属性值的快照（会 clone）。
    pub fn get_current(&self) -> Option<T> {
        self.inner.sender.borrow().as_ref().cloned()
    }

    /// 获取当前属性值的只读借用（零拷贝）。持有期间会阻塞写入，请尽快释放。
    pub fn get_current_borrow(&'_ self) -> Ref<'_, Option<T>> {
        self.inner.sender.borrow()
    }

    /// 获取当前值，不存在时返回默认值。
    pub fn get_or_default(&self) -> T
    where
        T: Default,
    {
        self.get_current().unwrap_or_default()
    }

    /// 创建一个监听器，用于异步监听属性值的变化。
    ///
    /// 监听器不持有属性本身：所有属性句柄释放后，`changed()` 返回错误并结束监听。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.inner.sender.subscribe(),
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

/// 属性监听器，用于异步接收属性值的变化。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 异步等待属性值的变化，返回新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        match self.receiver.borrow_and_update().as_ref() {
            None => Err(ReactivePropertyError::Destroyed),
            Some(value) => Ok(value.clone()),
        }
    }

    /// 同步获取当前值的克隆。
    pub fn borrow(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }
}
