//! 数据源相关错误类型。

use reqwest::StatusCode;
use thiserror::Error;

/// 探测总大小失败。
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("HEAD 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HEAD 请求返回异常状态: {0}")]
    Status(StatusCode),

    #[error("响应缺少有效的 Content-Length，无法规划分段")]
    MissingLength,

    #[error("数据源错误: {0}")]
    Source(String),
}

/// 拉取某个字节区间失败。
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Range 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Range 请求返回异常状态: {0}")]
    Status(StatusCode),

    #[error("服务器不支持 Range 请求")]
    RangeNotSupported,

    #[error("服务器返回的区间与请求不符：请求 {requested}，返回 {received}")]
    UnexpectedRange { requested: String, received: String },

    #[error("响应长度不符：期望 {expected} 字节，实际收到 {received} 字节")]
    LengthMismatch { expected: u64, received: u64 },

    #[error("数据源错误: {0}")]
    Source(String),
}
