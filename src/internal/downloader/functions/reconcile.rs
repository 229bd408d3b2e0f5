//! 续传检查：逐个检查分段文件，生成下载计划。

use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::internal::downloader::error::DownloadError;
use crate::internal::downloader::structs::{PlannedSegment, TransferPlan};
use crate::internal::segment::functions::inspect_part;
use crate::internal::segment::structs::{Segment, SegmentState};

/// 检查每个分段的本地文件，得到带续传状态的下载计划。
///
/// 比分段还长的分段文件不可信，会被删除并按 `Absent` 重新下载。
pub async fn reconcile_plan(
    output_path: &Path,
    total: u64,
    segments: Vec<Segment>,
) -> Result<TransferPlan, DownloadError> {
    let mut planned = Vec::with_capacity(segments.len());

    for segment in segments {
        let mut state = inspect_part(&segment)
            .await
            .map_err(|source| DownloadError::InspectPart {
                path: segment.part_path.clone(),
                source,
            })?;

        match state {
            SegmentState::Absent => {}
            SegmentState::Partial { existing } => info!(
                "分段 {} 续传：已有 {} / {} 字节",
                segment.index,
                existing,
                segment.len()
            ),
            SegmentState::Complete { existing } if existing > segment.len() => {
                warn!(
                    "分段 {} 的文件大小 {} 超过分段长度 {}，删除后重新下载: {}",
                    segment.index,
                    existing,
                    segment.len(),
                    segment.part_path.display()
                );
                fs::remove_file(&segment.part_path)
                    .await
                    .map_err(|source| DownloadError::RemovePart {
                        path: segment.part_path.clone(),
                        source,
                    })?;
                state = SegmentState::Absent;
            }
            SegmentState::Complete { .. } => {
                info!("分段 {} 已完整，跳过下载", segment.index)
            }
        }

        planned.push(PlannedSegment { segment, state });
    }

    Ok(TransferPlan {
        output_path: output_path.to_path_buf(),
        total,
        segments: planned,
    })
}
