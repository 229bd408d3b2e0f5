use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use tokio::task::JoinHandle;

use crate::internal::progress::structs::TransferProgress;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

const PB_STYLE: &str = "{spinner:.blue} {msg:.cyan} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

fn bar_style() -> Option<ProgressStyle> {
    ProgressStyle::with_template(PB_STYLE)
        .ok()
        .map(|style| style.tick_chars(TICK).progress_chars(PB_CHARS))
}

/// 控制台进度条：监听进度快照并刷新 indicatif 进度条。
pub struct ConsoleProgress {
    pub(crate) bar: ProgressBar,
    watcher: Option<JoinHandle<()>>,
}

impl ConsoleProgress {
    /// 创建进度条（尚未绑定进度来源）。
    pub fn new(msg: impl Into<String>) -> Self {
        let bar = ProgressBar::no_length();
        let bar = match bar_style() {
            Some(style) => bar.with_style(style),
            None => bar,
        };
        let msg: String = msg.into();
        Self {
            bar: bar.with_message(msg),
            watcher: None,
        }
    }

    /// 绑定进度来源：启动后台任务，每次进度变化时刷新进度条。
    ///
    /// 需在 tokio 运行时内调用。
    pub fn attach(mut self, progress: UnlockReactiveProperty<TransferProgress>) -> Self {
        if let Some(current) = progress.get_current() {
            self.apply(&current);
        }

        let bar = self.bar.clone();
        let mut watcher = progress.watch();
        drop(progress);

        self.watcher = Some(tokio::spawn(async move {
            while let Ok(p) = watcher.changed().await {
                apply_to_bar(&bar, &p);
            }
        }));
        self
    }

    /// 把一份进度快照应用到进度条上。
    pub fn apply(&self, progress: &TransferProgress) {
        apply_to_bar(&self.bar, progress);
    }

    /// 停止监听并结束进度条。
    pub fn finish(mut self, msg: Option<String>) {
        if let Some(handle) = self.watcher.take() {
            handle.abort();
        }
        match msg {
            Some(msg) => self.bar.finish_with_message(msg),
            None => self.bar.finish(),
        }
    }

    /// 出错时结束：保留当前进度，不标记为完成。
    pub fn abandon(mut self, msg: impl Into<String>) {
        if let Some(handle) = self.watcher.take() {
            handle.abort();
        }
        let msg: String = msg.into();
        self.bar.abandon_with_message(msg);
    }
}

impl Drop for ConsoleProgress {
    fn drop(&mut self) {
        if let Some(handle) = self.watcher.take() {
            handle.abort();
        }
    }
}

fn apply_to_bar(bar: &ProgressBar, progress: &TransferProgress) {
    if let Some(total) = progress.total {
        if bar.length() != Some(total) {
            bar.set_length(total);
        }
    }
    bar.set_position(progress.bytes_done);
}

/// 以 MB 格式化字节数（与控制台输出保持一致）。
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB ({})", bytes as f64 / (1024.0 * 1024.0), HumanBytes(bytes))
}
