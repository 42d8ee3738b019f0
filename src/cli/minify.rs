//! # minify 子命令 CLI 定义
//!
//! 批量压缩脚本资源，默认值即插件构建所用的固定配置：
//! `../../plugins` 下 `**/assets/script/**/*.js`，排除 `*.min.js`。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/minify.rs`

use crate::minifier::TopLevel;
use clap::Args;
use std::path::PathBuf;

/// 默认基准目录
pub const DEFAULT_BASE_DIR: &str = "../../plugins";
/// 默认 include 模式（相对基准目录）
pub const DEFAULT_INCLUDE: &str = "**/assets/script/**/*.js";
/// 默认 exclude 模式（相对基准目录）
pub const DEFAULT_EXCLUDE: &str = "**/assets/script/**/*.min.js";

/// minify 子命令参数
#[derive(Args, Debug)]
pub struct MinifyArgs {
    /// Base directory the glob patterns are relative to
    #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Glob pattern selecting source scripts (repeatable)
    #[arg(short, long = "include", default_value = DEFAULT_INCLUDE)]
    pub includes: Vec<String>,

    /// Glob pattern of files to skip (repeatable)
    #[arg(short, long = "exclude", default_value = DEFAULT_EXCLUDE)]
    pub excludes: Vec<String>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// How top-level declarations are treated
    #[arg(long, value_enum, default_value_t = TopLevel::Global)]
    pub top_level: TopLevel,

    /// Only list the files that would be minified
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> super::MinifyArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Minify(args) => args,
        }
    }

    #[test]
    fn test_defaults_match_plugin_layout() {
        let args = parse(&["scriptmin", "minify"]);
        assert_eq!(args.base_dir, std::path::PathBuf::from("../../plugins"));
        assert_eq!(args.includes, vec!["**/assets/script/**/*.js"]);
        assert_eq!(args.excludes, vec!["**/assets/script/**/*.min.js"]);
        assert_eq!(args.jobs, 0);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_repeated_patterns() {
        let args = parse(&[
            "scriptmin",
            "minify",
            "--base-dir",
            "web",
            "-i",
            "**/*.js",
            "-i",
            "**/*.mjs",
            "-e",
            "**/vendor/*.js",
            "--top-level",
            "module",
        ]);
        assert_eq!(args.includes, vec!["**/*.js", "**/*.mjs"]);
        assert_eq!(args.excludes, vec!["**/vendor/*.js"]);
        assert_eq!(args.top_level, super::TopLevel::Module);
    }
}
