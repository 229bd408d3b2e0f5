//! 下载相关错误类型。

use std::path::PathBuf;

use thiserror::Error;

use crate::internal::config::error::ConfigError;
use crate::internal::downloader::traits::HookAbort;
use crate::internal::segment::error::PlanError;
use crate::internal::source::error::{FetchError, ProbeError};

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("配置无效: {0}")]
    Config(#[from] ConfigError),

    #[error("探测文件大小失败: {0}")]
    Probe(#[from] ProbeError),

    #[error("规划分段失败: {0}")]
    Plan(#[from] PlanError),

    #[error("创建 HTTP 客户端失败: {0}")]
    Client(#[source] reqwest::Error),

    #[error("分段 {index} 下载失败: {source}")]
    Fetch {
        index: usize,
        #[source]
        source: FetchError,
    },

    #[error("检查分段文件失败 {path}: {source}")]
    InspectPart {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("创建目录失败 {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("打开分段文件失败 {path}: {source}")]
    CreatePart {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("写入分段文件失败 {path}: {source}")]
    WritePart {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("读取分段文件失败 {path}: {source}")]
    ReadPart {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("删除分段文件失败 {path}: {source}")]
    RemovePart {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("创建输出文件失败 {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("写入输出文件失败 {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("读取分段布局文件失败 {path}: {source}")]
    ReadLayout {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("写入分段布局文件失败 {path}: {source}")]
    WriteLayout {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("序列化分段布局失败: {0}")]
    EncodeLayout(#[source] toml::ser::Error),

    #[error("合并后的文件大小不符：期望 {expected} 字节，实际写入 {written} 字节")]
    MergedSizeMismatch { expected: u64, written: u64 },

    #[error("合并时缺少分段 {index} 的文件: {path}")]
    MissingPart { index: usize, path: PathBuf },

    #[error("下载被取消")]
    Cancelled,

    #[error("分段任务失败: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("多个分段下载失败: {0:?}")]
    SegmentsFailed(Vec<String>),

    /// 钩子在 before_start 中返回错误，中止下载。
    #[error("{0}")]
    HookAbort(#[from] HookAbort),
}
