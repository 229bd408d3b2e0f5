use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::internal::config::error::ConfigError;
use crate::internal::config::functions::expand_home;

/// 默认下载地址
pub const DEFAULT_URL: &str = "https://iso.omarchy.org/omarchy-3.1.1.iso";

/// 默认保存路径（相对用户目录）
pub const DEFAULT_OUTPUT_PATH: &str = "~/Downloads/omarchy-3.1.1.iso";

/// 默认并发连接数（即分段数）
pub const DEFAULT_CONNECTIONS: usize = 10;

/// 默认写入缓冲区大小：512KB
pub const DEFAULT_CHUNK_SIZE: usize = 512 * 1024;

/// 默认日志级别；`RUST_LOG` 优先
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 一次分段下载的完整配置。
///
/// 所有字段都有默认值，配置文件里只需写要覆盖的字段。
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransferConfig {
    /// 源文件地址
    pub url: String,
    /// 保存路径，支持 `~` 开头
    pub output_path: String,
    /// 并发连接数，同时也是分段数
    pub connections: usize,
    /// 每个分段写盘缓冲区大小（字节）
    pub chunk_size: usize,
    /// 建立连接的超时时间（秒）；不设置则不限制
    pub connect_timeout_secs: Option<u64>,
    /// 任一分段失败时是否让其余分段尽快停止
    pub fail_fast: bool,
    /// 合并时缺少分段文件是否报错；默认跳过并记录警告
    pub strict_merge: bool,
    /// 日志级别
    pub log_level: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            connections: DEFAULT_CONNECTIONS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            connect_timeout_secs: None,
            fail_fast: false,
            strict_merge: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl TransferConfig {
    /// 以地址和保存路径创建配置，其余字段取默认值。
    pub fn new(url: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    /// 设置并发连接数
    pub fn with_connections(mut self, connections: usize) -> Self {
        self.connections = connections;
        self
    }

    /// 设置写盘缓冲区大小
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// 设置失败时是否取消其余分段
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// 设置合并时缺少分段文件是否报错
    pub fn with_strict_merge(mut self, strict_merge: bool) -> Self {
        self.strict_merge = strict_merge;
        self
    }

    /// 从 TOML 字符串解析配置；`origin` 仅用于错误信息。
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// 从 TOML 文件加载配置。
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content, path)
    }

    /// 配置文件存在则加载，不存在则使用默认配置。
    ///
    /// 文件存在但无法读取或解析时返回错误，不会静默回退。
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match tokio::fs::try_exists(path).await {
            Ok(true) => {
                let config = Self::load_from_file(path).await?;
                info!("已加载配置文件: {}", path.display());
                Ok(config)
            }
            _ => {
                debug!("未找到配置文件 {}，使用默认配置", path.display());
                Ok(Self::default())
            }
        }
    }

    /// 校验配置。
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.url).map_err(|source| ConfigError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        if self.connections == 0 {
            return Err(ConfigError::ZeroConnections);
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(())
    }

    /// 展开 `~` 后的保存路径。
    pub fn resolved_output_path(&self) -> PathBuf {
        expand_home(&self.output_path)
    }
}
