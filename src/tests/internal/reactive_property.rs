//! 响应式属性测试：基础读写、watch 监听、销毁唤醒、进度计数器的并发累加。

use std::sync::Arc;

use crate::progress::{ProgressCounter, TransferProgress};
use crate::states::unlock_reactive::{UnlockReactiveProperty, UnlockReactivePropertyError};

#[tokio::test]
async fn unlock_basic_update_and_read() {
    let prop = UnlockReactiveProperty::new(0u64);
    prop.update(42);
    assert_eq!(prop.get_current().unwrap(), 42);

    prop.update_field(|v| {
        *v += 8;
        true
    });
    assert_eq!(prop.get_current().unwrap(), 50);
    assert_eq!(*prop.get_current_borrow(), Some(50));
}

#[tokio::test]
async fn unlock_watch_receives_updates() {
    let prop = UnlockReactiveProperty::new(0i32);
    let mut watcher = prop.watch();

    prop.update(1);
    assert_eq!(watcher.changed().await.unwrap(), 1);

    prop.update(2);
    assert_eq!(watcher.changed().await.unwrap(), 2);
    assert_eq!(watcher.borrow(), Some(2));
}

#[tokio::test]
async fn unchanged_field_does_not_notify() {
    let prop = UnlockReactiveProperty::new(5u32);
    let mut watcher = prop.watch();

    prop.update_field(|_| false);
    prop.update(6);
    // 第一次未修改的更新不会触发，收到的是 6
    assert_eq!(watcher.changed().await.unwrap(), 6);
}

#[tokio::test]
async fn watcher_ends_when_property_dropped() {
    let prop = UnlockReactiveProperty::new(String::from("a"));
    let mut watcher = prop.watch();
    drop(prop);

    assert!(matches!(
        watcher.changed().await,
        Err(UnlockReactivePropertyError::Destroyed)
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn progress_counter_loses_no_increments() {
    let counter = ProgressCounter::new();
    counter.reset(16 * 1000);

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let c = counter.clone();
            tokio::spawn(async move {
                for _ in 0..1000 {
                    c.add(1);
                }
            })
        })
        .collect();
    for t in tasks {
        t.await.unwrap();
    }

    assert_eq!(counter.current(), 16_000);
    let snapshot = counter.state().get_current().unwrap();
    assert_eq!(
        snapshot,
        TransferProgress {
            bytes_done: 16_000,
            total: Some(16_000)
        }
    );
    assert!(snapshot.is_finished());
    assert_eq!(snapshot.pct(), 100.0);
}

#[tokio::test]
async fn progress_snapshot_never_goes_backwards() {
    let counter = Arc::new(ProgressCounter::new());
    counter.reset(100);
    counter.add(30);
    counter.add(0);
    counter.add(20);

    assert_eq!(counter.state().get_or_default().bytes_done, 50);
    assert!(TransferProgress::default().pct().is_nan());
}
