//! 分段规划错误类型。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("连接数必须大于 0")]
    ZeroConnections,

    #[error("文件总大小为 0，无法规划分段")]
    EmptyContent,
}
