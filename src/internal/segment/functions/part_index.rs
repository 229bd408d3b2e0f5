use std::path::Path;

/// 若 `candidate` 是 `output` 的分段文件（`<output 文件名>.part<数字>`），返回其序号。
pub fn part_index(output: &Path, candidate: &Path) -> Option<usize> {
    let output_name = output.file_name()?.to_str()?;
    let name = candidate.file_name()?.to_str()?;
    let digits = name.strip_prefix(output_name)?.strip_prefix(".part")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
