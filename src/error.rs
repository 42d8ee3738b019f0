//! # 统一错误处理模块
//!
//! 定义 scriptmin 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分级
//! - 发现阶段错误（目录不存在、模式非法、遍历失败）：终止整个运行
//! - 单文件错误（读取、压缩、写入）：只影响该文件
//! - 删除旧产物失败：降级为警告
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// scriptmin 统一错误类型
#[derive(Error, Debug)]
pub enum MinifierError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write minified file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete existing minified file: {path}")]
    FileDeleteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 发现错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to scan '{path}': {reason}")]
    DiscoveryFailed { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 压缩错误
    // ─────────────────────────────────────────────────────────────
    #[error("Minification error in {path}\nReason: {reason}")]
    MinifyFailed { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 汇总
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} of {total} file(s) failed to minify")]
    PartialFailure { failed: usize, total: usize },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MinifierError>;
