//! # gen 子命令 CLI 定义
//!
//! obgen 3D 几何生成的参数集合。obgen 固定输出 SDF，转换到用户
//! 要求的格式由 `commands/gen.rs` 串接 obabel 完成。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/gen.rs`

use crate::cli::ExecArgs;
use crate::cmdline::args::ForceField;

use clap::Args;
use std::path::PathBuf;

/// gen 子命令参数
#[derive(Args, Debug)]
pub struct GenArgs {
    /// Input molecule file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output molecule file in any obabel-supported format
    #[arg(short, long)]
    pub output: PathBuf,

    /// Force field used for geometry generation
    #[arg(long = "ff", value_enum)]
    pub force_field: Option<ForceField>,

    #[command(flatten)]
    pub exec: ExecArgs,
}
