use std::path::{Path, PathBuf};

/// 展开以 `~` 开头的路径（`~` 或 `~/xxx`）。
///
/// 无法获取用户目录时原样返回；`~user` 形式不做处理。
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) => rest,
        None => return PathBuf::from(raw),
    };

    let rest = if rest.is_empty() {
        ""
    } else if let Some(stripped) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        stripped
    } else {
        return PathBuf::from(raw);
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(Path::new(rest)),
        None => PathBuf::from(raw),
    }
}
