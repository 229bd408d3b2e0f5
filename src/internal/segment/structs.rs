pub mod part_layout;
pub mod segment;
pub mod segment_state;

pub use part_layout::PartLayout;
pub use segment::Segment;
pub use segment_state::SegmentState;
