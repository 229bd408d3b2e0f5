use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 分段布局：写在输出文件旁边，记录分段文件是按哪种切分写出的。
///
/// 只有布局与本次规划完全一致时，已有的分段文件才能续传。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartLayout {
    pub url: String,
    pub total: u64,
    /// 实际分段数（连接数收缩之后）
    pub segments: usize,
}

impl PartLayout {
    pub fn new(url: impl Into<String>, total: u64, segments: usize) -> Self {
        Self {
            url: url.into(),
            total,
            segments,
        }
    }

    /// 布局文件路径：`<output>.parts.toml`。
    pub fn path_for(output: &Path) -> PathBuf {
        let mut name = output.as_os_str().to_owned();
        name.push(".parts.toml");
        PathBuf::from(name)
    }
}
