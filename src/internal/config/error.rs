//! 配置相关错误类型。

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件失败 {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("解析配置文件失败 {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("下载地址无效 {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("不支持的协议: {0}，仅支持 http / https")]
    UnsupportedScheme(String),

    #[error("连接数必须大于 0")]
    ZeroConnections,

    #[error("写入缓冲区大小必须大于 0")]
    ZeroChunkSize,
}
