//! # 源文件与压缩产物
//!
//! 压缩产物与源文件位于同一目录，扩展名前插入 `min`：
//! `foo/bar.js` -> `foo/bar.min.js`。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs`, `batch/transform.rs` 使用
//! - 无外部模块依赖

use std::path::{Path, PathBuf};

/// 压缩产物的文件名中缀
pub const MIN_INFIX: &str = "min";

/// 判断路径是否已是压缩产物（文件名形如 `name.min.ext`）
pub fn is_minified_artifact(path: &Path) -> bool {
    let stem = match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => stem,
        None => return false,
    };

    if path.extension().is_none() {
        return false;
    }

    Path::new(stem)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(MIN_INFIX))
        .unwrap_or(false)
}

/// 由源文件路径推导压缩产物路径
///
/// 没有文件名、没有扩展名或本身已是产物的路径返回 `None`，
/// 保证源文件与产物一一对应。
pub fn output_path_for(source: &Path) -> Option<PathBuf> {
    if is_minified_artifact(source) {
        return None;
    }

    let stem = source.file_stem()?.to_str()?;
    let ext = source.extension()?.to_str()?;

    Some(source.with_file_name(format!("{}.{}.{}", stem, MIN_INFIX, ext)))
}
