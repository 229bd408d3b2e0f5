use std::sync::Arc;

use crate::internal::config::structs::TransferConfig;
use crate::internal::downloader::error::DownloadError;
use crate::internal::downloader::structs::{DownloadReport, SegmentedDownloader};
use crate::internal::source::traits::RangeSource;

/// 本库主入口：按配置把远程文件分段下载到本地。
///
/// 不需要钩子和进度时直接调用即可；需要时改用 [`SegmentedDownloader`]。
///
/// example:
/// ```no_run
/// use segfetch::config::TransferConfig;
/// use segfetch::download_file;
///
/// # async fn run() -> Result<(), segfetch::downloader::DownloadError> {
/// let config = TransferConfig::new("https://example.com/big.iso", "~/Downloads/big.iso")
///     .with_connections(8);
/// let report = download_file(config).await?;
/// println!("{} 字节 -> {}", report.total, report.output_path.display());
/// # Ok(())
/// # }
/// ```
pub async fn download_file(config: TransferConfig) -> Result<DownloadReport, DownloadError> {
    SegmentedDownloader::new(config)?.send().await
}

/// 与 [`download_file`] 相同，但使用自定义数据源。
pub async fn download_file_with_source(
    config: TransferConfig,
    source: Arc<dyn RangeSource>,
) -> Result<DownloadReport, DownloadError> {
    SegmentedDownloader::with_source(config, source).send().await
}
