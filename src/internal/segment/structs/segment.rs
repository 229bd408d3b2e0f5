use std::path::PathBuf;

/// 一个分段：总区间中的一段闭区间 `[start, end]` 及其本地分段文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// 分段序号，从 0 开始，也是合并顺序
    pub index: usize,
    /// 起始偏移（含）
    pub start: u64,
    /// 结束偏移（含）
    pub end: u64,
    /// 分段文件路径：`<output>.part<index>`
    pub part_path: PathBuf,
}

impl Segment {
    /// 该分段应有的字节数。
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}
