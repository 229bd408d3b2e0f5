use std::path::PathBuf;

/// 单个分段的下载结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentReport {
    pub index: usize,
    pub start: u64,
    pub end: u64,
    /// 续传复用的本地字节数
    pub resumed_bytes: u64,
    /// 本次从网络拉取的字节数
    pub fetched_bytes: u64,
    /// 开始前就已完整，未发起请求
    pub already_complete: bool,
}

/// 合并结果。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// 写入输出文件的字节数
    pub bytes_written: u64,
    /// 已合并并删除的分段序号（升序）
    pub merged: Vec<usize>,
    /// 因分段文件缺失而跳过的分段序号
    pub skipped: Vec<usize>,
}

/// 一次完整下载的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub output_path: PathBuf,
    pub total: u64,
    /// 按分段序号升序
    pub segments: Vec<SegmentReport>,
    pub merge: MergeReport,
}

impl DownloadReport {
    /// 本次从网络拉取的总字节数。
    pub fn fetched_bytes(&self) -> u64 {
        self.segments.iter().map(|s| s.fetched_bytes).sum()
    }

    /// 续传复用的总字节数。
    pub fn resumed_bytes(&self) -> u64 {
        self.segments.iter().map(|s| s.resumed_bytes).sum()
    }
}
