//! # 美化输出工具
//!
//! 提供统一的终端输出样式。每条消息一次 `println!` 输出整行，
//! 多个 worker 并发输出时不会互相截断。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 与 `batch/` 模块使用
//! - worker 失败统一为 `#<index> <path>: <reason>` 格式
//! - 使用 `colored` crate

use colored::Colorize;
use std::path::Path;

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

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印单个 worker 的失败
pub fn print_worker_failure(index: usize, output_path: &Path, reason: &str) {
    print_error(&worker_failure_line(index, output_path, reason));
}

/// `#<index> <输出路径>: <原因>`
pub fn worker_failure_line(index: usize, output_path: &Path, reason: &str) -> String {
    format!("#{} {}: {}", index, output_path.display(), reason)
}

/// 拼接错误链，便于单行输出
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
