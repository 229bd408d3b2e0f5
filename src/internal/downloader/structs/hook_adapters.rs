//! 单阶段钩子适配器：将闭包包装成 [`DownloadHook`]，供 `with_xx_hook` 使用。

use std::future::Future;

use async_trait::async_trait;

use crate::internal::downloader::structs::{DownloadReport, TransferPlan};
use crate::internal::downloader::traits::{DownloadHook, HookAbort};

/// 仅实现「开始前」的钩子适配器。
pub(crate) struct BeforeStartHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> DownloadHook for BeforeStartHookAdapter<F>
where
    F: FnMut() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
{
    async fn before_start(&mut self) -> Result<(), HookAbort> {
        (self.0)().await
    }
}

/// 仅实现「规划完成」的钩子适配器。
pub(crate) struct OnPlannedHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> DownloadHook for OnPlannedHookAdapter<F>
where
    F: FnMut(&TransferPlan) + Send + Sync + 'static,
{
    fn on_planned(&mut self, plan: &TransferPlan) {
        (self.0)(plan);
    }
}

/// 仅实现「完成后」的钩子适配器。
pub(crate) struct AfterCompleteHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> DownloadHook for AfterCompleteHookAdapter<F>
where
    F: FnMut(&DownloadReport) + Send + Sync + 'static,
{
    async fn after_complete(&mut self, report: &DownloadReport) {
        (self.0)(report)
    }
}
