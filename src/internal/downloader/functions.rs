pub mod fetch_segment;
pub mod merge_parts;
pub mod prepare_layout;
pub mod reconcile;
pub mod spawn_segments;

pub use fetch_segment::{FetchSegmentParams, fetch_segment};
pub use merge_parts::{MergePartsParams, merge_parts, verify_merged_size};
pub use prepare_layout::{clear_part_layout, prepare_part_layout};
pub use reconcile::reconcile_plan;
pub use spawn_segments::{SpawnSegmentsParams, join_segments, spawn_segments};
