//! # 美化输出工具
//!
//! 提供统一的终端输出样式，也是运行日志的唯一出口。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印压缩成功消息：源文件 -> 产物 (前后字节数与压缩率)
pub fn print_minified(from: &str, to: &str, before: usize, after: usize) {
    println!(
        "{} {} {} {} {}",
        "[OK]".green().bold(),
        from.dimmed(),
        "->".cyan(),
        to,
        format!("({} -> {}, {})", format_bytes(before), format_bytes(after), ratio(before, after))
            .dimmed()
    );
}

/// 打印计划中的 源文件 -> 产物 映射（dry-run）
pub fn print_planned(from: &str, to: &str) {
    println!("{} {} {} {}", "[PLAN]".cyan().bold(), from, "->".cyan(), to);
}

/// 人类可读的字节数
pub fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}

/// 体积变化百分比
fn ratio(before: usize, after: usize) -> String {
    if before == 0 {
        return "0.0%".to_string();
    }
    let change = (after as f64 - before as f64) / before as f64 * 100.0;
    format!("{:+.1}%", change)
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
