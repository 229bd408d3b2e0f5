use std::path::PathBuf;

use crate::internal::segment::structs::{Segment, SegmentState};

/// 一个已规划的分段及其续传状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSegment {
    pub segment: Segment,
    pub state: SegmentState,
}

impl PlannedSegment {
    /// 本次仍需拉取的字节数。
    pub fn remaining(&self) -> u64 {
        self.segment.len() - self.state.reusable_bytes(self.segment.len())
    }
}

/// 下载计划：探测到的总大小与各分段的续传状态，在开始拉取前交给钩子。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub output_path: PathBuf,
    pub total: u64,
    pub segments: Vec<PlannedSegment>,
}

impl TransferPlan {
    /// 本地已有、可直接复用的字节数。
    pub fn reusable_bytes(&self) -> u64 {
        self.segments
            .iter()
            .map(|p| p.state.reusable_bytes(p.segment.len()))
            .sum()
    }

    /// 是否存在可续传的分段（部分完成或已完整）。
    pub fn is_resume(&self) -> bool {
        self.segments
            .iter()
            .any(|p| !matches!(p.state, SegmentState::Absent))
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().map(|p| &p.segment)
    }
}
