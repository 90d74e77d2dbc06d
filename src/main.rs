//! # imbatch - 批量图像变换工具
//!
//! 枚举目录中的图像文件，执行灰度转换或容器格式重编码，
//! 以有界并行的方式分批写入输出目录。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── config.rs   (参数校验 -> RunConfig)
//!   ├── commands/   (流水线执行逻辑)
//!   │     ├── batch/     (收集、加载、分批调度)
//!   │     ├── transform/ (编解码、变换、命名)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod transform;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&utils::output::error_chain(&e));
        std::process::exit(1);
    }
}
