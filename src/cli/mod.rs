//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `minify`: 批量压缩插件目录下的脚本资源
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: minify

pub mod minify;

use clap::{Parser, Subcommand};

/// scriptmin - 插件脚本批量压缩工具
#[derive(Parser)]
#[command(name = "scriptmin")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch minifier for plugin script assets", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Minify every script under the plugin tree into a sibling .min file
    Minify(minify::MinifyArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
