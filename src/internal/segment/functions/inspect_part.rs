use std::io::ErrorKind;

use tokio::fs;

use crate::internal::segment::structs::{Segment, SegmentState};

/// 检查分段文件，判断该分段是未开始、部分完成还是已完整。
///
/// 文件不存在视为 [`SegmentState::Absent`]；其余 I/O 错误原样返回。
/// 文件比分段长时同样返回 `Complete`，`existing` 保留实际大小，由调用方决定如何处理。
pub async fn inspect_part(segment: &Segment) -> Result<SegmentState, std::io::Error> {
    let existing = match fs::metadata(&segment.part_path).await {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SegmentState::Absent),
        Err(e) => return Err(e),
    };

    let expected = segment.len();
    if existing >= expected {
        Ok(SegmentState::Complete { existing })
    } else if existing == 0 {
        Ok(SegmentState::Absent)
    } else {
        Ok(SegmentState::Partial { existing })
    }
}
