//! # 压缩器模块
//!
//! 定义脚本压缩的统一接口与选项。
//!
//! ## 功能
//! - `Minifier` trait：输入源码文本，输出压缩后的字节
//! - `MinifyOptions`：compress / mangle / 顶层作用域模式
//!
//! ## 依赖关系
//! - 被 `batch/transform.rs`, `commands/minify.rs` 使用
//! - 子模块: js

pub mod js;

pub use js::JsMinifier;

use clap::ValueEnum;

/// 顶层作用域模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum TopLevel {
    /// Classic script: top-level names are globals and are never renamed
    #[default]
    Global,
    /// ES module: top-level names are module-local and may be renamed
    Module,
}

impl std::fmt::Display for TopLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopLevel::Global => write!(f, "global"),
            TopLevel::Module => write!(f, "module"),
        }
    }
}

/// 压缩选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyOptions {
    /// 移除空白与无用代码
    pub compress: bool,
    /// 重命名局部标识符
    pub mangle: bool,
    pub top_level: TopLevel,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        MinifyOptions {
            compress: true,
            mangle: true,
            top_level: TopLevel::Global,
        }
    }
}

/// 脚本压缩器
///
/// 实现必须可在多个线程间共享：批量执行时同一个压缩器
/// 会被所有并行分支同时调用。
pub trait Minifier: Sync {
    /// 压缩一段源码。失败时返回人类可读的原因，由调用方附加文件路径。
    fn minify(&self, source: &str) -> std::result::Result<Vec<u8>, String>;
}
