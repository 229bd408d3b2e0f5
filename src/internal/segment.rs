//! 分段领域模块：按总大小切分字节区间，并根据本地分段文件判断续传状态。

pub mod error;
pub mod functions;
pub mod structs;
