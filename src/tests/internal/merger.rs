//! 合并测试：按序号升序拼接、删除分段文件、缺失分段的处理。

use tempfile::tempdir;

use crate::downloader::{
    DownloadError, MergePartsParams, MergeReport, merge_parts, verify_merged_size,
};
use crate::segment::plan_segments;
use crate::tests::part_files;

#[tokio::test]
async fn merges_in_index_order_and_removes_parts() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.bin");
    let segments = plan_segments(40, 4, &output).unwrap();
    for s in &segments {
        std::fs::write(&s.part_path, vec![s.index as u8; s.len() as usize]).unwrap();
    }

    // 乱序传入，合并结果仍按序号排列
    let mut shuffled = segments.clone();
    shuffled.reverse();
    let report = merge_parts(MergePartsParams {
        output_path: &output,
        segments: &shuffled,
        strict: false,
        chunk_size: 4,
    })
    .await
    .unwrap();

    let merged = std::fs::read(&output).unwrap();
    let expected: Vec<u8> = (0..4u8).flat_map(|i| vec![i; 10]).collect();
    assert_eq!(merged, expected);
    assert_eq!(report.bytes_written, 40);
    assert_eq!(report.merged, vec![0, 1, 2, 3]);
    assert!(report.skipped.is_empty());
    assert!(part_files(dir.path()).is_empty());
}

#[tokio::test]
async fn missing_part_is_skipped_by_default() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.bin");
    let segments = plan_segments(30, 3, &output).unwrap();
    std::fs::write(&segments[0].part_path, vec![0u8; 10]).unwrap();
    std::fs::write(&segments[2].part_path, vec![2u8; 10]).unwrap();

    let report = merge_parts(MergePartsParams {
        output_path: &output,
        segments: &segments,
        strict: false,
        chunk_size: 64,
    })
    .await
    .unwrap();

    assert_eq!(report.skipped, vec![1]);
    assert_eq!(report.merged, vec![0, 2]);
    assert_eq!(std::fs::metadata(&output).unwrap().len(), 20);
}

#[tokio::test]
async fn missing_part_fails_in_strict_mode() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.bin");
    let segments = plan_segments(30, 3, &output).unwrap();
    std::fs::write(&segments[0].part_path, vec![0u8; 10]).unwrap();

    let err = merge_parts(MergePartsParams {
        output_path: &output,
        segments: &segments,
        strict: true,
        chunk_size: 64,
    })
    .await
    .unwrap_err();

    assert!(matches!(err, DownloadError::MissingPart { index: 1, .. }));
}

#[tokio::test]
async fn existing_output_is_truncated() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.bin");
    std::fs::write(&output, vec![9u8; 1000]).unwrap();
    let segments = plan_segments(4, 2, &output).unwrap();
    for s in &segments {
        std::fs::write(&s.part_path, vec![1u8; s.len() as usize]).unwrap();
    }

    merge_parts(MergePartsParams {
        output_path: &output,
        segments: &segments,
        strict: true,
        chunk_size: 64,
    })
    .await
    .unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), vec![1u8; 4]);
}

#[tokio::test]
async fn creates_missing_parent_directory() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("nested/deeper/out.bin");
    let segments = plan_segments(2, 1, &dir.path().join("p.bin")).unwrap();
    std::fs::write(&segments[0].part_path, b"ok").unwrap();

    merge_parts(MergePartsParams {
        output_path: &output,
        segments: &segments,
        strict: true,
        chunk_size: 64,
    })
    .await
    .unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), b"ok");
}

#[test]
fn merged_size_must_match_total() {
    let report = MergeReport {
        bytes_written: 1200,
        merged: vec![0, 1, 2, 3],
        skipped: Vec::new(),
    };
    assert!(matches!(
        verify_merged_size(1000, &report),
        Err(DownloadError::MergedSizeMismatch {
            expected: 1000,
            written: 1200
        })
    ));
    assert!(verify_merged_size(1200, &report).is_ok());
}

#[test]
fn skipped_parts_are_reported_not_size_checked() {
    let report = MergeReport {
        bytes_written: 20,
        merged: vec![0, 2],
        skipped: vec![1],
    };
    assert!(verify_merged_size(30, &report).is_ok());
}
