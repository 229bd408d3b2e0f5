pub mod download_hooks_container;
pub mod download_report;
pub mod hook_adapters;
pub mod segmented_downloader;
pub mod transfer_plan;

// 重导出公共类型
pub use download_hooks_container::DownloadHooksContainer;
pub use download_report::{DownloadReport, MergeReport, SegmentReport};
pub use segmented_downloader::SegmentedDownloader;
pub use transfer_plan::{PlannedSegment, TransferPlan};
