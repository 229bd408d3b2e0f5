//! 数据源领域模块：探测总大小、按字节区间拉取数据。
//!
//! 下载流程只依赖 [`traits::range_source::RangeSource`]，HTTP 实现见 [`structs::http_range_source`]。

pub mod error;
pub mod structs;
pub mod traits;
