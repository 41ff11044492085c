//! # energy 子命令 CLI 定义
//!
//! obenergy 能量评估的参数集合。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/energy.rs`

use crate::cli::ExecArgs;
use crate::cmdline::args::ForceField;

use clap::Args;
use std::path::PathBuf;

/// energy 子命令参数
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Input molecule file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the energy report to this file instead of the console
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Force field used for evaluation
    #[arg(long = "ff", value_enum)]
    pub force_field: Option<ForceField>,

    /// Make all hydrogen explicit
    #[arg(long, default_value_t = false)]
    pub add_h: bool,

    /// Print every individual energy interaction (obenergy -v)
    #[arg(long, default_value_t = false)]
    pub components: bool,

    #[command(flatten)]
    pub exec: ExecArgs,
}
