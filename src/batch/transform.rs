//! # 单文件压缩流程
//!
//! 读取源脚本 -> 压缩 -> 删除旧产物 -> 写入新产物。
//!
//! ## 功能
//! - 每一步失败只影响当前文件
//! - 删除旧产物失败仅记为警告，仍尝试写入
//! - 压缩失败时不写任何输出
//! - 去掉开头的 UTF-8 BOM 再交给压缩器
//!
//! ## 依赖关系
//! - 被 `commands/minify.rs` 通过 `BatchRunner` 调用
//! - 使用 `minifier/`, `models/artifact.rs`, `utils/output.rs`

use crate::error::{MinifierError, Result};
use crate::minifier::Minifier;
use crate::models::output_path_for;
use crate::utils::output;

use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};

/// UTF-8 字节序标记
const BOM: char = '\u{FEFF}';

/// 单文件处理结果
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub output: PathBuf,
    /// 源文件字节数
    pub source_len: usize,
    /// 产物字节数
    pub output_len: usize,
    /// 是否替换了已存在的旧产物
    pub replaced_existing: bool,
    /// 非致命问题（如删除旧产物失败）
    pub warnings: Vec<String>,
}

/// 压缩单个源文件并替换其产物
///
/// 步骤严格按 读取 -> 压缩 -> 检查旧产物 -> 删除 -> 写入 的顺序执行。
/// 日志通过 `pb.suspend` 输出，避免打断进度条。
pub fn minify_file<M>(source: &Path, minifier: &M, pb: &ProgressBar) -> Result<FileOutcome>
where
    M: Minifier + ?Sized,
{
    let content = fs::read_to_string(source).map_err(|e| MinifierError::FileReadError {
        path: source.display().to_string(),
        source: e,
    })?;

    let output_path = output_path_for(source).ok_or_else(|| {
        MinifierError::InvalidArgument(format!(
            "Cannot derive a minified file name for {}",
            source.display()
        ))
    })?;

    pb.suspend(|| {
        output::print_info(&format!("Minifying file: {}", source.display()));
        output::print_info(&format!("Output: {}", output_path.display()));
    });

    let text = content.strip_prefix(BOM).unwrap_or(&content);

    let minified = minifier
        .minify(text)
        .map_err(|reason| MinifierError::MinifyFailed {
            path: source.display().to_string(),
            reason,
        })?;

    let mut warnings = Vec::new();
    let mut replaced_existing = false;

    // symlink_metadata 也能发现悬空链接
    if fs::symlink_metadata(&output_path).is_ok() {
        match fs::remove_file(&output_path) {
            Ok(()) => {
                replaced_existing = true;
                pb.suspend(|| {
                    output::print_info(&format!(
                        "Deleted existing minified file: {}",
                        output_path.display()
                    ))
                });
            }
            Err(e) => {
                let err = MinifierError::FileDeleteError {
                    path: output_path.display().to_string(),
                    source: e,
                };
                let msg = format!("{} ({})", err, describe_source(&err));
                pb.suspend(|| output::print_warning(&msg));
                warnings.push(msg);
            }
        }
    }

    fs::write(&output_path, &minified).map_err(|e| MinifierError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(FileOutcome {
        source: source.to_path_buf(),
        output: output_path,
        source_len: content.len(),
        output_len: minified.len(),
        replaced_existing,
        warnings,
    })
}

/// 取出底层错误信息
fn describe_source(err: &MinifierError) -> String {
    std::error::Error::source(err)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
