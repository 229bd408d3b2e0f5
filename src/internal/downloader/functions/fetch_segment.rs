//! 单个分段的拉取：按续传状态决定起点，流式写入分段文件并累加进度。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::StreamExt;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::internal::downloader::error::DownloadError;
use crate::internal::downloader::structs::{PlannedSegment, SegmentReport};
use crate::internal::progress::structs::ProgressCounter;
use crate::internal::segment::structs::SegmentState;
use crate::internal::source::error::FetchError;
use crate::internal::source::traits::RangeSource;

/// 拉取单个分段时的参数（形参超过 3 个，用 struct 承载）。
pub struct FetchSegmentParams {
    pub source: Arc<dyn RangeSource>,
    pub planned: PlannedSegment,
    pub progress: ProgressCounter,
    /// 写盘缓冲区大小
    pub chunk_size: usize,
    /// 取消标志：为 true 时在下一个数据块边界停止
    pub cancelled: Arc<AtomicBool>,
}

/// 拉取一个分段。
///
/// - 已完整：把分段长度计入进度，不发请求；
/// - 部分完成：把已有字节计入进度，从 `start + existing` 请求到 `end` 并追加；
/// - 不存在：请求整个分段写入新文件。
///
/// 只会创建或追加本分段自己的文件。失败时已写入的数据会先刷盘，留给下次续传。
pub async fn fetch_segment(params: FetchSegmentParams) -> Result<SegmentReport, DownloadError> {
    let FetchSegmentParams {
        source,
        planned,
        progress,
        chunk_size,
        cancelled,
    } = params;
    let segment = planned.segment;
    let segment_len = segment.len();

    let resumed = planned.state.reusable_bytes(segment_len);
    progress.add(resumed);

    if let SegmentState::Complete { .. } = planned.state {
        return Ok(SegmentReport {
            index: segment.index,
            start: segment.start,
            end: segment.end,
            resumed_bytes: resumed,
            fetched_bytes: 0,
            already_complete: true,
        });
    }

    if cancelled.load(Ordering::SeqCst) {
        return Err(DownloadError::Cancelled);
    }

    let start = segment.start + resumed;
    let remaining = segment.end - start + 1;
    debug!(
        "分段 {} 请求区间 [{}, {}]（{} 字节）",
        segment.index, start, segment.end, remaining
    );

    let mut stream = source
        .fetch_range(start, segment.end)
        .await
        .map_err(|source| DownloadError::Fetch {
            index: segment.index,
            source,
        })?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&segment.part_path)
        .await
        .map_err(|source| DownloadError::CreatePart {
            path: segment.part_path.clone(),
            source,
        })?;
    let mut writer = BufWriter::with_capacity(chunk_size, file);

    let mut written: u64 = 0;
    let outcome: Result<(), DownloadError> = async {
        while let Some(chunk_result) = stream.next().await {
            if cancelled.load(Ordering::SeqCst) {
                return Err(DownloadError::Cancelled);
            }

            let chunk = chunk_result.map_err(|source| DownloadError::Fetch {
                index: segment.index,
                source,
            })?;
            let len = chunk.len() as u64;
            if written + len > remaining {
                return Err(DownloadError::Fetch {
                    index: segment.index,
                    source: FetchError::LengthMismatch {
                        expected: remaining,
                        received: written + len,
                    },
                });
            }

            writer
                .write_all(&chunk)
                .await
                .map_err(|source| DownloadError::WritePart {
                    path: segment.part_path.clone(),
                    source,
                })?;
            written += len;
            progress.add(len);
        }
        Ok(())
    }
    .await;

    // 无论成功与否都把缓冲区落盘，保证分段文件长度与已计入进度的字节一致
    let flushed = writer
        .flush()
        .await
        .map_err(|source| DownloadError::WritePart {
            path: segment.part_path.clone(),
            source,
        });
    outcome?;
    flushed?;

    if written != remaining {
        return Err(DownloadError::Fetch {
            index: segment.index,
            source: FetchError::LengthMismatch {
                expected: remaining,
                received: written,
            },
        });
    }

    info!(
        "分段 {} 完成：续传 {} 字节，本次拉取 {} 字节",
        segment.index, resumed, written
    );

    Ok(SegmentReport {
        index: segment.index,
        start: segment.start,
        end: segment.end,
        resumed_bytes: resumed,
        fetched_bytes: written,
        already_complete: false,
    })
}
