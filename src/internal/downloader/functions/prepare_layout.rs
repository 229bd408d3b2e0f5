//! 分段布局检查：本次规划与上次写出分段文件时的布局不一致时，丢弃旧分段文件。

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tracing::{debug, warn};

use crate::internal::downloader::error::DownloadError;
use crate::internal::segment::functions::part_index;
use crate::internal::segment::structs::PartLayout;

async fn read_layout(path: &Path) -> Result<Option<PartLayout>, DownloadError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DownloadError::ReadLayout {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    match toml::from_str(&content) {
        Ok(layout) => Ok(Some(layout)),
        Err(e) => {
            warn!("分段布局文件无法解析，视为不存在 {}: {}", path.display(), e);
            Ok(None)
        }
    }
}

/// 对照布局文件决定旧分段文件能否续传，并写入本次布局。
///
/// - 布局一致：保留序号小于分段数的分段文件，删除多余序号；
/// - 布局不一致或布局文件不存在：删除输出文件旁所有分段文件，从头下载。
///
/// 返回旧分段文件是否被保留。
pub async fn prepare_part_layout(
    output_path: &Path,
    layout: &PartLayout,
) -> Result<bool, DownloadError> {
    let layout_path = PartLayout::path_for(output_path);
    let previous = read_layout(&layout_path).await?;
    let reuse = previous.as_ref() == Some(layout);

    let dir = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let inspect_err = |source: std::io::Error| DownloadError::InspectPart {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir).await.map_err(inspect_err)?;

    let mut removed = 0usize;
    while let Some(entry) = entries.next_entry().await.map_err(inspect_err)? {
        let path = entry.path();
        let Some(index) = part_index(output_path, &path) else {
            continue;
        };
        if reuse && index < layout.segments {
            continue;
        }
        fs::remove_file(&path)
            .await
            .map_err(|source| DownloadError::RemovePart {
                path: path.clone(),
                source,
            })?;
        removed += 1;
    }

    if removed > 0 {
        match &previous {
            Some(prev) if reuse => {
                warn!("删除 {} 个多余的分段文件（分段数 {}）", removed, prev.segments)
            }
            Some(prev) => warn!(
                "分段布局已变化（总大小 {} -> {}，分段数 {} -> {}），丢弃 {} 个旧分段文件",
                prev.total, layout.total, prev.segments, layout.segments, removed
            ),
            None => warn!("缺少分段布局文件，丢弃 {} 个无法确认来源的分段文件", removed),
        }
    }

    let content = toml::to_string(layout).map_err(DownloadError::EncodeLayout)?;
    fs::write(&layout_path, content)
        .await
        .map_err(|source| DownloadError::WriteLayout {
            path: layout_path.clone(),
            source,
        })?;
    debug!("已写入分段布局 {}", layout_path.display());

    Ok(reuse)
}

/// 合并完成后删除布局文件；文件不存在不算错误。
pub async fn clear_part_layout(output_path: &Path) -> Result<(), DownloadError> {
    let layout_path = PartLayout::path_for(output_path);
    match fs::remove_file(&layout_path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(DownloadError::WriteLayout {
            path: layout_path,
            source,
        }),
    }
}
