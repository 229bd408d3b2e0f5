//! 分段下载：为每个分段 spawn 一个拉取任务，以及等待所有任务完成。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::internal::downloader::error::DownloadError;
use crate::internal::downloader::structs::{SegmentReport, TransferPlan};
use crate::internal::progress::structs::ProgressCounter;
use crate::internal::source::traits::RangeSource;

use super::fetch_segment::{FetchSegmentParams, fetch_segment};

/// 单个分段任务句柄：(分段序号, JoinHandle)。
pub type SegmentTaskHandle = (usize, JoinHandle<Result<SegmentReport, DownloadError>>);

/// spawn 分段任务时的参数（形参超过 3 个，用 struct 承载）。
pub struct SpawnSegmentsParams<'a> {
    pub source: Arc<dyn RangeSource>,
    pub plan: &'a TransferPlan,
    pub progress: ProgressCounter,
    pub chunk_size: usize,
    /// 为 true 时，任一分段失败会通知其余分段尽快停止
    pub fail_fast: bool,
    pub cancelled: Arc<AtomicBool>,
}

/// 每个分段一个任务，全部同时启动，返回按分段序号排列的句柄。
pub fn spawn_segments(params: SpawnSegmentsParams<'_>) -> Vec<SegmentTaskHandle> {
    params
        .plan
        .segments
        .iter()
        .map(|planned| {
            let index = planned.segment.index;
            let fetch_params = FetchSegmentParams {
                source: Arc::clone(&params.source),
                planned: planned.clone(),
                progress: params.progress.clone(),
                chunk_size: params.chunk_size,
                cancelled: Arc::clone(&params.cancelled),
            };
            let cancelled = Arc::clone(&params.cancelled);
            let fail_fast = params.fail_fast;

            let handle = tokio::spawn(async move {
                let result = fetch_segment(fetch_params).await;
                if let Err(e) = &result {
                    if !matches!(e, DownloadError::Cancelled) {
                        error!("分段 {} 失败: {}", index, e);
                        if fail_fast {
                            cancelled.store(true, Ordering::SeqCst);
                        }
                    }
                }
                result
            });
            (index, handle)
        })
        .collect()
}

/// 等待全部分段任务结束（不会因为某段失败而提前返回），汇总结果。
///
/// 全部成功时返回按序号排列的报告；只有一个分段失败时原样返回该错误，
/// 多个分段失败时返回 [`DownloadError::SegmentsFailed`]。因 fail-fast 被取消的分段不计入失败。
pub async fn join_segments(
    handles: Vec<SegmentTaskHandle>,
) -> Result<Vec<SegmentReport>, DownloadError> {
    let mut reports = Vec::with_capacity(handles.len());
    let mut failures: Vec<(usize, DownloadError)> = Vec::new();
    let mut cancelled = 0usize;

    for (index, h) in handles {
        match h.await {
            Ok(Ok(report)) => reports.push(report),
            Ok(Err(DownloadError::Cancelled)) => cancelled += 1,
            Ok(Err(e)) => failures.push((index, e)),
            Err(join_err) => failures.push((index, DownloadError::TaskJoin(join_err))),
        }
    }

    if cancelled > 0 {
        warn!("{} 个分段因其他分段失败而提前停止", cancelled);
    }

    match failures.len() {
        0 if cancelled > 0 => Err(DownloadError::Cancelled),
        0 => {
            reports.sort_by_key(|r| r.index);
            Ok(reports)
        }
        1 => Err(failures.remove(0).1),
        _ => Err(DownloadError::SegmentsFailed(
            failures
                .into_iter()
                .map(|(index, e)| format!("分段 {}: {}", index, e))
                .collect(),
        )),
    }
}
