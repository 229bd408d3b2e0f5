use std::path::Path;

use crate::internal::segment::error::PlanError;
use crate::internal::segment::functions::part_path;
use crate::internal::segment::structs::Segment;

/// 把 `[0, total)` 切成 `connections` 个连续、不重叠的闭区间。
///
/// 第 i 段为 `[i * part, (i + 1) * part - 1]`，最后一段延伸到 `total - 1` 吸收余数，
/// 其中 `part = total / connections`。总大小小于连接数时，段数收缩为 `total`，保证每段至少 1 字节。
pub fn plan_segments(
    total: u64,
    connections: usize,
    output: &Path,
) -> Result<Vec<Segment>, PlanError> {
    if connections == 0 {
        return Err(PlanError::ZeroConnections);
    }
    if total == 0 {
        return Err(PlanError::EmptyContent);
    }

    let count = (connections as u64).min(total);
    let part_size = total / count;

    let segments = (0..count)
        .map(|i| {
            let start = i * part_size;
            let end = if i < count - 1 {
                (i + 1) * part_size - 1
            } else {
                total - 1
            };
            let index = i as usize;
            Segment {
                index,
                start,
                end,
                part_path: part_path(output, index),
            }
        })
        .collect();

    Ok(segments)
}
