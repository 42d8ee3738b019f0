//! # scriptmin - 插件脚本批量压缩工具
//!
//! 在插件目录树下查找脚本资源，逐个并行压缩，
//! 生成同目录的 `.min.js` 产物并替换旧产物。
//!
//! ## 子命令
//! - `minify` - 批量压缩脚本（默认: `../../plugins/**/assets/script/**/*.js`）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (发现、单文件压缩、并行执行)
//!   │     ├── minifier/  (压缩器接口与 JS 实现)
//!   │     └── models/    (源文件与产物命名)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod minifier;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
