use std::time::Duration;

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use reqwest::header::{CONTENT_LENGTH, CONTENT_RANGE, HeaderMap, RANGE};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::internal::config::structs::TransferConfig;
use crate::internal::source::error::{FetchError, ProbeError};
use crate::internal::source::traits::{ByteStream, RangeSource};

/// 生成 Range 请求头：`bytes=start-end`，end 为闭区间上界。
pub(crate) fn range_header(start: u64, end: u64) -> String {
    format!("bytes={}-{}", start, end)
}

/// 从响应头读取 Content-Length。
///
/// HEAD 响应没有响应体，`Response::content_length()` 取的是响应体大小，这里只认原始响应头。
fn header_content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

/// 解析 `Content-Range: bytes <start>-<end>/<total|*>`，返回闭区间的起止偏移。
pub(crate) fn parse_content_range(value: &str) -> Option<(u64, u64)> {
    let spec = value.trim().strip_prefix("bytes ")?;
    let (range, _total) = spec.split_once('/')?;
    let (start, end) = range.split_once('-')?;
    Some((start.trim().parse().ok()?, end.trim().parse().ok()?))
}

/// 206 响应的 `Content-Range` 必须与请求的区间一致；缺少该头时交给长度校验兜底。
fn check_content_range(headers: &HeaderMap, start: u64, end: u64) -> Result<(), FetchError> {
    let Some(value) = headers.get(CONTENT_RANGE) else {
        return Ok(());
    };
    let received = value.to_str().unwrap_or_default();
    match parse_content_range(received) {
        Some(range) if range == (start, end) => Ok(()),
        _ => Err(FetchError::UnexpectedRange {
            requested: range_header(start, end),
            received: received.to_string(),
        }),
    }
}

/// 基于 reqwest 的 HTTP 数据源。
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: Client,
    url: String,
}

impl HttpRangeSource {
    /// 使用已有的 client 创建数据源。
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// 按配置创建 client 与数据源。
    pub fn from_config(config: &TransferConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        Ok(Self::new(builder.build()?, config.url.clone()))
    }
}

#[async_trait]
impl RangeSource for HttpRangeSource {
    async fn probe_length(&self) -> Result<u64, ProbeError> {
        let resp = self.client.head(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProbeError::Status(status));
        }

        match header_content_length(resp.headers()) {
            Some(len) if len > 0 => {
                debug!("HEAD {} -> Content-Length {}", self.url, len);
                Ok(len)
            }
            _ => Err(ProbeError::MissingLength),
        }
    }

    async fn fetch_range(&self, start: u64, end: u64) -> Result<ByteStream, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .header(RANGE, range_header(start, end))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // 200 表示服务器忽略了 Range；只有请求的恰好是整个文件时才可以直接使用
        if status == StatusCode::PARTIAL_CONTENT {
            check_content_range(resp.headers(), start, end)?;
        } else {
            let whole_body = start == 0 && header_content_length(resp.headers()) == Some(end + 1);
            if !whole_body {
                return Err(FetchError::RangeNotSupported);
            }
        }

        Ok(resp.bytes_stream().map_err(FetchError::Request).boxed())
    }
}
