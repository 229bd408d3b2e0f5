//! 续传检查测试：按本地分段文件大小判断 Absent / Partial / Complete。

use std::path::Path;

use tempfile::tempdir;

use crate::downloader::reconcile_plan;
use crate::segment::{SegmentState, inspect_part, plan_segments};

#[tokio::test]
async fn classifies_part_files_by_size() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("file.bin");
    let segments = plan_segments(400, 4, &output).unwrap();

    // 0: 不存在；1: 部分；2: 完整；3: 空文件
    std::fs::write(&segments[1].part_path, vec![1u8; 40]).unwrap();
    std::fs::write(&segments[2].part_path, vec![2u8; 100]).unwrap();
    std::fs::write(&segments[3].part_path, b"").unwrap();

    assert_eq!(inspect_part(&segments[0]).await.unwrap(), SegmentState::Absent);
    assert_eq!(
        inspect_part(&segments[1]).await.unwrap(),
        SegmentState::Partial { existing: 40 }
    );
    assert_eq!(
        inspect_part(&segments[2]).await.unwrap(),
        SegmentState::Complete { existing: 100 }
    );
    assert_eq!(inspect_part(&segments[3]).await.unwrap(), SegmentState::Absent);
}

#[tokio::test]
async fn oversized_part_counts_as_complete() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("file.bin");
    let segments = plan_segments(10, 2, &output).unwrap();
    std::fs::write(&segments[0].part_path, vec![0u8; 9]).unwrap();

    let state = inspect_part(&segments[0]).await.unwrap();
    assert_eq!(state, SegmentState::Complete { existing: 9 });
    assert_eq!(state.reusable_bytes(segments[0].len()), 5);
}

#[tokio::test]
async fn plan_discards_oversized_part() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("file.bin");
    let segments = plan_segments(10, 2, &output).unwrap();
    std::fs::write(&segments[0].part_path, vec![0u8; 9]).unwrap();
    let part = segments[0].part_path.clone();

    let plan = reconcile_plan(&output, 10, segments).await.unwrap();
    assert_eq!(plan.segments[0].state, SegmentState::Absent);
    assert_eq!(plan.segments[0].remaining(), 5);
    assert!(!part.exists());
}

#[tokio::test]
async fn plan_reports_reusable_bytes() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("file.bin");
    let segments = plan_segments(1000, 4, &output).unwrap();
    std::fs::write(&segments[0].part_path, vec![0u8; 250]).unwrap();
    std::fs::write(&segments[3].part_path, vec![0u8; 10]).unwrap();

    let plan = reconcile_plan(&output, 1000, segments).await.unwrap();
    assert!(plan.is_resume());
    assert_eq!(plan.reusable_bytes(), 260);
    assert_eq!(plan.segments[0].remaining(), 0);
    assert_eq!(plan.segments[1].remaining(), 250);
    assert_eq!(plan.segments[3].remaining(), 240);
}

#[tokio::test]
async fn fresh_directory_is_not_a_resume() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("file.bin");
    let segments = plan_segments(100, 3, &output).unwrap();

    let plan = reconcile_plan(Path::new(&output), 100, segments).await.unwrap();
    assert!(!plan.is_resume());
    assert_eq!(plan.reusable_bytes(), 0);
}
