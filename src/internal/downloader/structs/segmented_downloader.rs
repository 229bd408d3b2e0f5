use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use tokio::fs;
use tracing::{debug, info};

use crate::internal::config::structs::TransferConfig;
use crate::internal::downloader::error::DownloadError;
use crate::internal::downloader::functions::{
    MergePartsParams, SpawnSegmentsParams, clear_part_layout, join_segments, merge_parts,
    prepare_part_layout, reconcile_plan, spawn_segments, verify_merged_size,
};
use crate::internal::downloader::structs::hook_adapters::{
    AfterCompleteHookAdapter, BeforeStartHookAdapter, OnPlannedHookAdapter,
};
use crate::internal::downloader::structs::{
    DownloadHooksContainer, DownloadReport, TransferPlan,
};
use crate::internal::downloader::traits::{DownloadHook, HookAbort};
use crate::internal::progress::structs::{ProgressCounter, TransferProgress};
use crate::internal::segment::functions::plan_segments;
use crate::internal::segment::structs::PartLayout;
use crate::internal::source::structs::HttpRangeSource;
use crate::internal::source::traits::RangeSource;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

/// 分段下载器：探测 → 规划 → 续传检查 → 并发拉取 → 合并。
///
/// 不实现 Clone：同一个输出路径同时只应有一个下载器在写分段文件。
pub struct SegmentedDownloader {
    config: TransferConfig,
    output_path: PathBuf,
    source: Arc<dyn RangeSource>,
    hooks: DownloadHooksContainer,
    progress: ProgressCounter,
}

impl SegmentedDownloader {
    /// 按配置创建下载器，使用 HTTP 数据源。
    pub fn new(config: TransferConfig) -> Result<Self, DownloadError> {
        config.validate()?;
        let source = HttpRangeSource::from_config(&config).map_err(DownloadError::Client)?;
        Ok(Self::build(config, Arc::new(source)))
    }

    /// 使用自定义数据源创建下载器（不校验 URL，数据源自行负责寻址）。
    pub fn with_source(config: TransferConfig, source: Arc<dyn RangeSource>) -> Self {
        Self::build(config, source)
    }

    fn build(config: TransferConfig, source: Arc<dyn RangeSource>) -> Self {
        let output_path = config.resolved_output_path();
        Self {
            config,
            output_path,
            source,
            hooks: DownloadHooksContainer::default(),
            progress: ProgressCounter::new(),
        }
    }

    /// 注册完整钩子；可多次调用，按注册顺序执行。
    pub fn with_hook(mut self, hook: impl DownloadHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 注册「开始前」钩子；返回 `Err(HookAbort)` 则不发起任何请求。
    pub fn with_before_start_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
    {
        self.hooks.add(BeforeStartHookAdapter(f));
        self
    }

    /// 注册「规划完成」钩子，可用来打印总大小与各分段续传状态。
    pub fn with_on_planned_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TransferPlan) + Send + Sync + 'static,
    {
        self.hooks.add(OnPlannedHookAdapter(f));
        self
    }

    /// 注册「完成后」钩子。
    pub fn with_after_complete_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&DownloadReport) + Send + Sync + 'static,
    {
        self.hooks.add(AfterCompleteHookAdapter(f));
        self
    }

    /// 可监听的进度快照，可在 `send()` 之前取出交给进度条。
    pub fn progress(&self) -> UnlockReactiveProperty<TransferProgress> {
        self.progress.state()
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    /// 执行完整下载流程。
    ///
    /// 任何分段失败都会在全部分段结束后返回错误，且不会合并；已写入的分段文件保留，
    /// 下次以相同的地址、总大小和分段数运行时自动续传，布局不同则丢弃旧分段文件。
    pub async fn send(&mut self) -> Result<DownloadReport, DownloadError> {
        self.hooks.run_before_start().await?;

        let total = self.source.probe_length().await?;
        info!("文件大小: {} 字节", total);

        let segments = plan_segments(total, self.config.connections, &self.output_path)?;
        debug!("规划 {} 个分段", segments.len());

        if let Some(parent) = self
            .output_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| DownloadError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let layout = PartLayout::new(self.config.url.clone(), total, segments.len());
        if !prepare_part_layout(&self.output_path, &layout).await? {
            debug!("没有可续传的分段布局，从头下载");
        }

        let plan = reconcile_plan(&self.output_path, total, segments).await?;
        if plan.is_resume() {
            info!("续传：本地已有 {} 字节", plan.reusable_bytes());
        }

        self.progress.reset(total);
        self.hooks.run_on_planned(&plan);

        let handles = spawn_segments(SpawnSegmentsParams {
            source: Arc::clone(&self.source),
            plan: &plan,
            progress: self.progress.clone(),
            chunk_size: self.config.chunk_size,
            fail_fast: self.config.fail_fast,
            cancelled: Arc::new(AtomicBool::new(false)),
        });
        let segment_reports = join_segments(handles).await?;
        for report in &segment_reports {
            self.hooks.run_on_segment_done(report);
        }

        let segments: Vec<_> = plan.segments().cloned().collect();
        let merge = merge_parts(MergePartsParams {
            output_path: &self.output_path,
            segments: &segments,
            strict: self.config.strict_merge,
            chunk_size: self.config.chunk_size,
        })
        .await?;
        verify_merged_size(total, &merge)?;
        clear_part_layout(&self.output_path).await?;

        let report = DownloadReport {
            output_path: self.output_path.clone(),
            total,
            segments: segment_reports,
            merge,
        };
        info!(
            "下载完成: {}（本次拉取 {} 字节，复用 {} 字节）",
            report.output_path.display(),
            report.fetched_bytes(),
            report.resumed_bytes()
        );

        self.hooks.run_after_complete(&report).await;
        Ok(report)
    }
}
