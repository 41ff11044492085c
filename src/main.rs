//! # obtool - Open Babel 命令行包装工具箱
//!
//! 把 Open Babel 的五个命令行程序统一包装成单一可执行文件：
//! 语义化选项 → 命令行字符串 → 可选的子进程执行与流式输出捕获。
//!
//! ## 子命令
//! - `convert`   - 格式转换 (obabel)
//! - `minimize`  - 几何最小化 (obminimize)
//! - `conformer` - 构象生成 (obconformer)
//! - `energy`    - 能量评估 (obenergy)
//! - `gen`       - 3D 几何生成 (obgen)
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── cmdline/ (片段映射与命令组装)
//!   │     └── exec/    (进程执行与重定向重建)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod cmdline;
mod commands;
mod error;
mod exec;
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
