/// 分段的续传状态，由本地分段文件大小与分段长度比较得出。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    /// 本地没有分段文件，从头下载
    Absent,
    /// 已有部分数据，从 `start + existing` 继续
    Partial { existing: u64 },
    /// 已下载完整，无需请求
    Complete { existing: u64 },
}

impl SegmentState {
    /// 本地已有、可计入进度的字节数（不超过分段长度）。
    pub fn reusable_bytes(&self, segment_len: u64) -> u64 {
        match *self {
            SegmentState::Absent => 0,
            SegmentState::Partial { existing } => existing,
            SegmentState::Complete { .. } => segment_len,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SegmentState::Complete { .. })
    }
}
