//! 数据源 trait：分段下载流程与具体协议之间的接缝。

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;

use crate::internal::source::error::{FetchError, ProbeError};

/// 区间响应体：按到达顺序产出的数据块。
pub type ByteStream = BoxStream<'static, Result<Bytes, FetchError>>;

/// 可按字节区间读取的远程资源。
///
/// 实现需要可在多个分段任务间共享（`Send + Sync`），下载器以 `Arc<dyn RangeSource>` 持有。
#[async_trait]
pub trait RangeSource: Send + Sync {
    /// 探测资源总字节数；长度未知或为 0 时返回 [`ProbeError::MissingLength`]。
    async fn probe_length(&self) -> Result<u64, ProbeError>;

    /// 拉取闭区间 `[start, end]` 的数据。
    async fn fetch_range(&self, start: u64, end: u64) -> Result<ByteStream, FetchError>;
}
