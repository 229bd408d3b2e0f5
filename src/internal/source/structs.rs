pub mod http_range_source;

pub use http_range_source::HttpRangeSource;
