use crate::internal::downloader::structs::{DownloadReport, SegmentReport, TransferPlan};
use crate::internal::downloader::traits::{DownloadHook, HookAbort};

/// 钩子容器：按注册顺序依次执行。
#[derive(Default)]
pub struct DownloadHooksContainer {
    hooks: Vec<Box<dyn DownloadHook>>,
}

impl DownloadHooksContainer {
    /// 添加一个下载钩子；支持多次调用以注册多个钩子。
    pub fn add(&mut self, hook: impl DownloadHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub async fn run_before_start(&mut self) -> Result<(), HookAbort> {
        for h in self.hooks.iter_mut() {
            h.before_start().await?;
        }
        Ok(())
    }

    pub fn run_on_planned(&mut self, plan: &TransferPlan) {
        for h in self.hooks.iter_mut() {
            h.on_planned(plan);
        }
    }

    pub fn run_on_segment_done(&mut self, report: &SegmentReport) {
        for h in self.hooks.iter_mut() {
            h.on_segment_done(report);
        }
    }

    pub async fn run_after_complete(&mut self, report: &DownloadReport) {
        for h in self.hooks.iter_mut() {
            h.after_complete(report).await;
        }
    }
}
