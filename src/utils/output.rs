//! # 美化输出工具
//!
//! 提供统一的终端输出样式，包括外部进程输出的前缀行打印。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `exec/runner.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::io::Write;

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

/// 打印组装好的命令行字符串
pub fn print_command(cmd: &str) {
    println!("{} {}", "$".dimmed(), cmd.cyan());
}

/// 打印外部进程的一行输出，带 `NAME >>> ` 前缀
///
/// `same_line` 为真时使用回车 + 清行转义序列原地覆盖，
/// 用于进度类输出（如 obminimize 的迭代日志）。
pub fn print_process_line(display_name: &str, line: &str, same_line: bool) {
    let prefixed = format!("{} {}", format!("{} >>>", display_name).yellow().bold(), line);
    if same_line {
        print!("\r\x1b[K{}", prefixed);
        std::io::stdout().flush().ok();
    } else {
        println!("{}", prefixed);
    }
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
