use std::path::{Path, PathBuf};

/// 分段文件路径：在输出文件名后追加 `.part<index>`。
pub fn part_path(output: &Path, index: usize) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(format!(".part{}", index));
    PathBuf::from(name)
}
