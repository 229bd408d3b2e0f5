/// 传输进度快照：已写入字节数与总大小。
///
/// 由下载器的 `progress()` 读取或监听；比例可用 [`TransferProgress::pct`] 获取。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferProgress {
    /// 已完成的字节数（含续传复用的本地字节）
    pub bytes_done: u64,
    /// 文件总大小，探测完成前为 `None`
    pub total: Option<u64>,
}

impl TransferProgress {
    /// 进度百分比（0～100）；总大小为 0 或未知时返回 `f64::NAN`。
    pub fn pct(&self) -> f64 {
        self.total
            .filter(|&t| t > 0)
            .map(|t| (self.bytes_done as f64 / t as f64) * 100.0)
            .unwrap_or(f64::NAN)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.total, Some(t) if self.bytes_done >= t)
    }
}
