//! 进度领域模块：各分段共享的原子计数器、可监听的进度快照、控制台进度条。

pub mod structs;
