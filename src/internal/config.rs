//! 传输配置领域模块：配置结构体、文件加载与路径展开。

pub mod error;
pub mod functions;
pub mod structs;
