//! # conformer 子命令 CLI 定义
//!
//! obconformer 构象搜索的参数集合。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/conformer.rs`

use crate::cli::ExecArgs;
use crate::cmdline::args::ForceField;

use clap::Args;
use std::path::PathBuf;

/// conformer 子命令参数
#[derive(Args, Debug)]
pub struct ConformerArgs {
    /// Input molecule file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output molecule file (written through a shell redirect)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of conformers to generate
    #[arg(short, long)]
    pub nconf: Option<u32>,

    /// Geometry optimization steps per conformer
    #[arg(short, long)]
    pub steps: Option<u32>,

    /// Force field used for scoring
    #[arg(long = "ff", value_enum)]
    pub force_field: Option<ForceField>,

    #[command(flatten)]
    pub exec: ExecArgs,
}
