//! 合并：按分段序号依次把分段文件追加到输出文件，追加后删除分段文件。

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, info, warn};

use crate::internal::downloader::error::DownloadError;
use crate::internal::downloader::structs::MergeReport;
use crate::internal::segment::structs::Segment;

/// 合并分段文件时的参数（形参超过 3 个，用 struct 承载）。
pub struct MergePartsParams<'a> {
    pub output_path: &'a Path,
    pub segments: &'a [Segment],
    /// 为 true 时缺少分段文件直接报错；否则记录警告并跳过
    pub strict: bool,
    pub chunk_size: usize,
}

/// 创建（或截断）输出文件，按序号升序追加每个分段文件的全部内容，
/// 每个分段追加完成后立即删除它。
///
/// 传入的分段顺序不影响结果，总是按 `index` 升序合并。
pub async fn merge_parts(params: MergePartsParams<'_>) -> Result<MergeReport, DownloadError> {
    let output_path = params.output_path;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| DownloadError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let file = File::create(output_path)
        .await
        .map_err(|source| DownloadError::CreateOutput {
            path: output_path.to_path_buf(),
            source,
        })?;
    let mut writer = BufWriter::with_capacity(params.chunk_size, file);

    let mut ordered: Vec<&Segment> = params.segments.iter().collect();
    ordered.sort_by_key(|s| s.index);

    let mut report = MergeReport::default();

    for segment in ordered {
        let part = match File::open(&segment.part_path).await {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if params.strict {
                    return Err(DownloadError::MissingPart {
                        index: segment.index,
                        path: segment.part_path.clone(),
                    });
                }
                warn!(
                    "缺少分段 {} 的文件 {}，合并时跳过",
                    segment.index,
                    segment.part_path.display()
                );
                report.skipped.push(segment.index);
                continue;
            }
            Err(source) => {
                return Err(DownloadError::ReadPart {
                    path: segment.part_path.clone(),
                    source,
                });
            }
        };

        let mut reader = BufReader::with_capacity(params.chunk_size, part);
        let copied = tokio::io::copy_buf(&mut reader, &mut writer)
            .await
            .map_err(|source| DownloadError::WriteOutput {
                path: output_path.to_path_buf(),
                source,
            })?;
        drop(reader);
        // 分段内容落入输出文件之后才能删除分段文件
        writer
            .flush()
            .await
            .map_err(|source| DownloadError::WriteOutput {
                path: output_path.to_path_buf(),
                source,
            })?;

        fs::remove_file(&segment.part_path)
            .await
            .map_err(|source| DownloadError::RemovePart {
                path: segment.part_path.clone(),
                source,
            })?;

        debug!("已合并分段 {}（{} 字节）", segment.index, copied);
        report.bytes_written += copied;
        report.merged.push(segment.index);
    }

    writer
        .flush()
        .await
        .map_err(|source| DownloadError::WriteOutput {
            path: output_path.to_path_buf(),
            source,
        })?;
    writer
        .get_ref()
        .sync_all()
        .await
        .map_err(|source| DownloadError::WriteOutput {
            path: output_path.to_path_buf(),
            source,
        })?;

    info!(
        "合并完成: {}（{} 字节，{} 个分段）",
        output_path.display(),
        report.bytes_written,
        report.merged.len()
    );
    Ok(report)
}

/// 校验合并结果的总字节数。
///
/// 没有跳过任何分段时，写入字节数必须等于探测到的总大小；跳过分段的情况由
/// [`MergeReport::skipped`] 单独报告。
pub fn verify_merged_size(total: u64, report: &MergeReport) -> Result<(), DownloadError> {
    if report.skipped.is_empty() && report.bytes_written != total {
        return Err(DownloadError::MergedSizeMismatch {
            expected: total,
            written: report.bytes_written,
        });
    }
    Ok(())
}
