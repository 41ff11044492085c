//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令，每个子命令对应一个
//! Open Babel 可执行程序。
//!
//! ## 命令结构
//! - `convert`:   格式转换 (obabel)
//! - `minimize`:  几何最小化 (obminimize)
//! - `conformer`: 构象生成 (obconformer)
//! - `energy`:    能量评估 (obenergy)
//! - `gen`:       3D 几何生成 (obgen)
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, minimize, conformer, energy, gen

pub mod conformer;
pub mod convert;
pub mod energy;
pub mod gen;
pub mod minimize;

use clap::{Args, Parser, Subcommand};

/// obtool - Open Babel 命令行包装工具箱
#[derive(Parser)]
#[command(name = "obtool")]
#[command(author = "Abdullrahman Elsayed")]
#[command(version)]
#[command(about = "A unified Open Babel command-line wrapper toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert molecule files between formats (obabel)
    Convert(convert::ConvertArgs),

    /// Minimize molecular geometry with a force field (obminimize)
    Minimize(minimize::MinimizeArgs),

    /// Generate low-energy conformers (obconformer)
    Conformer(conformer::ConformerArgs),

    /// Evaluate molecular mechanics energy (obenergy)
    Energy(energy::EnergyArgs),

    /// Generate 3D geometry, then convert to the requested format (obgen)
    Gen(gen::GenArgs),
}

/// 所有子命令共用的执行控制参数
#[derive(Args, Debug, Clone, Default)]
pub struct ExecArgs {
    /// Build and print the command string without executing it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Stream the external program's output line by line
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Overwrite streamed output in place on a single line
    #[arg(long, default_value_t = false, requires = "verbose")]
    pub same_line: bool,

    /// Run the command directly instead of through a shell
    #[arg(long, default_value_t = false)]
    pub no_shell: bool,
}
