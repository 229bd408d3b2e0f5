pub mod inspect_part;
pub mod part_index;
pub mod part_path;
pub mod plan_segments;

pub use inspect_part::inspect_part;
pub use part_index::part_index;
pub use part_path::part_path;
pub use plan_segments::plan_segments;
