//! 下载流程钩子：在「开始前 / 规划完成 / 分段完成 / 合并完成」插入自定义逻辑。

use async_trait::async_trait;

use crate::internal::downloader::structs::{DownloadReport, SegmentReport, TransferPlan};

/// 钩子执行时请求中止下载时使用的错误。
#[derive(Debug, Clone)]
pub struct HookAbort;

impl std::fmt::Display for HookAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("下载被钩子中止")
    }
}

impl std::error::Error for HookAbort {}

/// 下载流程钩子。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用 `with_before_start_hook` / `with_on_planned_hook` / `with_after_complete_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过下载器的 `with_hook` 注册。
#[async_trait]
pub trait DownloadHook: Send + Sync {
    /// 探测之前调用。返回 `Err` 则中止本次下载。
    async fn before_start(&mut self) -> Result<(), HookAbort> {
        Ok(())
    }

    /// 分段规划与续传检查完成、开始拉取之前调用。
    fn on_planned(&mut self, _plan: &TransferPlan) {}

    /// 某个分段拉取成功后调用；按分段序号顺序触发。
    fn on_segment_done(&mut self, _report: &SegmentReport) {}

    /// 合并完成、分段文件删除后调用。
    async fn after_complete(&mut self, _report: &DownloadReport) {}
}
