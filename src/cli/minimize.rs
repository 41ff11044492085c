//! # minimize 子命令 CLI 定义
//!
//! obminimize 几何最小化的参数集合。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/minimize.rs`

use crate::cli::ExecArgs;
use crate::cmdline::args::{ForceField, MinAlgorithm};

use clap::Args;
use std::path::PathBuf;

/// minimize 子命令参数
#[derive(Args, Debug)]
pub struct MinimizeArgs {
    /// Input molecule file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output molecule file (written through a shell redirect)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of minimization steps
    #[arg(short = 'n', long)]
    pub steps: u32,

    /// Minimization algorithm
    #[arg(short, long, value_enum)]
    pub algorithm: Option<MinAlgorithm>,

    /// Force field used for minimization
    #[arg(long = "ff", value_enum)]
    pub force_field: Option<ForceField>,

    /// Output format ID (derived from the output extension when omitted)
    #[arg(long)]
    pub out_format: Option<String>,

    /// Make all hydrogen explicit
    #[arg(long, default_value_t = false)]
    pub add_h: bool,

    #[command(flatten)]
    pub exec: ExecArgs,
}
