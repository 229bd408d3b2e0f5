use anyhow::Context;
use segfetch::config::TransferConfig;
use segfetch::downloader::SegmentedDownloader;
use segfetch::logging::init_logging;
use segfetch::progress::{ConsoleProgress, format_size};
use segfetch::segment::SegmentState;

/// 工作目录下的可选配置文件
const CONFIG_FILE: &str = "segfetch.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = TransferConfig::load_or_default(CONFIG_FILE)
        .await
        .context("加载配置失败")?;
    init_logging(&config.log_level);
    config.validate().context("配置无效")?;

    let mut downloader = SegmentedDownloader::new(config)?.with_on_planned_hook(|plan| {
        println!("文件大小: {}", format_size(plan.total));
        for planned in &plan.segments {
            match planned.state {
                SegmentState::Absent => {}
                SegmentState::Partial { existing } => println!(
                    "分段 {}: 续传，已有 {} / {} 字节",
                    planned.segment.index,
                    existing,
                    planned.segment.len()
                ),
                SegmentState::Complete { .. } => {
                    println!("分段 {}: 已完整，跳过", planned.segment.index)
                }
            }
        }
    });

    let bar = ConsoleProgress::new("下载中").attach(downloader.progress());

    match downloader.send().await {
        Ok(report) => {
            bar.finish(Some("完成".to_string()));
            println!("✅ 下载完成: {}", report.output_path.display());
            if !report.merge.skipped.is_empty() {
                println!("⚠️ 合并时缺少分段: {:?}", report.merge.skipped);
            }
            Ok(())
        }
        Err(e) => {
            bar.abandon("失败");
            Err(e).context("下载失败，已下载的分段会在下次运行时续传")
        }
    }
}
