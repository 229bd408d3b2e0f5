//! 分段下载器领域模块：规划、续传检查、并发拉取与合并。
//!
//! 使用方式：`SegmentedDownloader::new(config)?.with_hook(hook).send().await`
//! 对外导出以 [`crate::downloader`] 为准，此处仅做模块划分。

pub mod error;
pub mod functions;
pub mod structs;
pub mod traits;
