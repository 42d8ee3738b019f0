//! # minify 命令实现
//!
//! 发现 -> 并行压缩 -> 汇总报告。
//!
//! ## 功能
//! - 按 glob 模式收集源脚本并打印清单
//! - 并行压缩，每个文件独立成败
//! - 全部成功时打印确认；否则列出失败文件并返回 `PartialFailure`
//! - `--dry-run` 仅打印 源文件 -> 产物 映射
//!
//! ## 依赖关系
//! - 使用 `cli/minify.rs` 定义的参数
//! - 使用 `batch/`, `minifier/`, `models/`
//! - 使用 `utils/output.rs`

use crate::batch::{minify_file, BatchResult, BatchRunner, FileCollector, ProcessResult};
use crate::cli::minify::MinifyArgs;
use crate::error::{MinifierError, Result};
use crate::minifier::{JsMinifier, Minifier, MinifyOptions};
use crate::models::output_path_for;
use crate::utils::output;

use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 失败文件表格行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 执行 minify 命令
pub fn execute(args: MinifyArgs) -> Result<()> {
    output::print_header("Minifying script assets");

    let collector = FileCollector::new(args.base_dir.clone(), &args.includes, &args.excludes)?;
    let files = collector.collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched {:?} under {}",
            args.includes,
            collector.base().display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Minifying the following {} file(s):", files.len()));
    for file in &files {
        println!("    {}", file.display());
    }

    if args.dry_run {
        print_plan(&files);
        return Ok(());
    }

    let minifier = JsMinifier::new(MinifyOptions {
        top_level: args.top_level,
        ..MinifyOptions::default()
    });

    let mut runner = BatchRunner::new(args.jobs);
    if args.no_progress {
        runner = runner.without_progress();
    }
    output::print_info(&format!(
        "Using {} parallel job(s), top-level mode: {}",
        runner.jobs(),
        args.top_level
    ));

    let result = run_batch(&runner, &files, &minifier)?;
    report(&result)
}

/// 并行压缩所有文件
pub fn run_batch<M>(runner: &BatchRunner, files: &[PathBuf], minifier: &M) -> Result<BatchResult>
where
    M: Minifier,
{
    runner.run(files, |file, pb| process_file(file, minifier, pb))
}

/// 单文件分支：把结果转换为 `ProcessResult` 并打印结果行
fn process_file<M>(file: &Path, minifier: &M, pb: &indicatif::ProgressBar) -> ProcessResult
where
    M: Minifier,
{
    match minify_file(file, minifier, pb) {
        Ok(outcome) => {
            let from = outcome.source.display().to_string();
            let to = outcome.output.display().to_string();
            let label = if outcome.replaced_existing {
                format!("{} (replaced)", to)
            } else {
                to.clone()
            };
            pb.suspend(|| {
                output::print_minified(&from, &label, outcome.source_len, outcome.output_len)
            });
            ProcessResult::Success(from, to, outcome.warnings)
        }
        Err(e) => {
            let path = file.display().to_string();
            let reason = error_chain(&e);
            pb.suspend(|| output::print_error(&format!("{}: {}", path, reason)));
            ProcessResult::Failed(path, reason)
        }
    }
}

/// 汇总报告，部分失败时返回错误
fn report(result: &BatchResult) -> Result<()> {
    output::print_separator();

    if result.warnings > 0 {
        output::print_warning(&format!(
            "{} stale output(s) could not be deleted before writing",
            result.warnings
        ));
    }

    if result.all_succeeded() {
        output::print_done(&format!(
            "Minification successful for all {} file(s)",
            result.success
        ));
        return Ok(());
    }

    output::print_warning(&format!(
        "Minification finished with failures: {} succeeded, {} failed",
        result.success, result.failed
    ));

    let rows: Vec<FailureRow> = result
        .failures
        .iter()
        .map(|(file, reason)| FailureRow {
            file: file.clone(),
            reason: reason.clone(),
        })
        .collect();
    println!("{}", Table::new(&rows));

    Err(MinifierError::PartialFailure {
        failed: result.failed,
        total: result.total(),
    })
}

/// dry-run：打印 源文件 -> 产物 映射
fn print_plan(files: &[PathBuf]) {
    output::print_separator();
    for file in files {
        if let Some(out) = output_path_for(file) {
            output::print_planned(&file.display().to_string(), &out.display().to_string());
        }
    }
    output::print_success(&format!("Dry run: {} file(s) would be minified", files.len()));
}

/// 拼接错误及其底层原因
fn error_chain(err: &MinifierError) -> String {
    let mut msg = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        msg.push_str(&format!(": {}", cause));
        source = std::error::Error::source(cause);
    }
    msg
}
