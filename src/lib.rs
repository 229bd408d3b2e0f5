/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::download::*;

pub mod config {
    use crate::internal;
    pub use internal::config::error::ConfigError;
    pub use internal::config::functions::*;
    pub use internal::config::structs::transfer_config::*;
}

/// 对外提供数据源抽象，以便接入 HTTP 以外的来源或在测试中替换
pub mod source {
    use crate::internal;
    pub use internal::source::error::*;
    pub use internal::source::structs::*;
    pub use internal::source::traits::*;
}

pub mod segment {
    use crate::internal;
    pub use internal::segment::error::*;
    pub use internal::segment::functions::*;
    pub use internal::segment::structs::*;
}

pub mod progress {
    use crate::internal;
    pub use internal::progress::structs::*;
    pub use internal::progress::structs::console_progress::format_size;
}

pub mod states {
    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }
}

pub mod downloader {
    use crate::internal;
    // 下载器：类型、钩子与流程函数（以 lib 为中心，此处统一导出）
    pub use internal::downloader::error::*;
    pub use internal::downloader::functions::*;
    pub use internal::downloader::structs::*;
    pub use internal::downloader::traits::*;
}

pub mod logging {
    use crate::internal;
    pub use internal::logging::*;
}
