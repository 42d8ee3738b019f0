//! # 批量处理模块
//!
//! 提供脚本批量压缩的三个阶段。
//!
//! ## 功能
//! - 发现：按 glob 模式收集源脚本
//! - 转换：单文件 读取 -> 压缩 -> 替换产物
//! - 执行：并行处理、进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/minify.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;
pub mod transform;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
pub use transform::{minify_file, FileOutcome};
