//! # convert 子命令 CLI 定义
//!
//! obabel 格式转换的参数集合。未指定的选项不会出现在命令串里，
//! 其缺省行为由 obabel 自身决定。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::cli::ExecArgs;

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input molecule file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output molecule file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Input format ID (auto-detected from the extension when omitted)
    #[arg(long)]
    pub in_format: Option<String>,

    /// Output format ID (auto-detected from the extension when omitted)
    #[arg(long)]
    pub out_format: Option<String>,

    /// Generate 2D coordinates
    #[arg(long, default_value_t = false)]
    pub gen2d: bool,

    /// Generate 3D coordinates (obabel adds hydrogens by default)
    #[arg(long, default_value_t = false)]
    pub gen3d: bool,

    /// Make all hydrogen explicit
    #[arg(long, default_value_t = false)]
    pub add_h: bool,

    /// Make all hydrogen implicit
    #[arg(long, default_value_t = false)]
    pub delete_h: bool,

    /// Add properties from descriptors in the list (SDF, CML, ...)
    #[arg(long, num_args = 1..)]
    pub add_props: Option<Vec<String>>,

    /// Add or replace a single property
    #[arg(long, num_args = 2, value_names = ["NAME", "VALUE"])]
    pub property: Option<Vec<String>>,

    /// Center atomic coordinates at (0,0,0)
    #[arg(short, long, default_value_t = false)]
    pub center: bool,

    /// Calculate partial charges by the specified method
    #[arg(long)]
    pub partial_charge: Option<String>,

    /// Combine adjacent conformers in multi-molecule input into a single molecule
    #[arg(long, default_value_t = false)]
    pub read_conformers: bool,

    /// Convert dative bonds (e.g. [N+]([O-])=O to N(=O)=O)
    #[arg(long, default_value_t = false)]
    pub dative: bool,

    /// Join all input molecules into a single output entry
    #[arg(short, long, default_value_t = false)]
    pub join: bool,

    /// Add hydrogens appropriate for the given pH
    #[arg(long)]
    pub ph: Option<f64>,

    /// Add or replace the molecular title
    #[arg(long)]
    pub title: Option<String>,

    /// Output multiple conformers as separate molecules
    #[arg(long, default_value_t = false)]
    pub write_conformers: bool,

    /// Produce consecutively numbered output files, one molecule each
    #[arg(short = 'm', long, default_value_t = false)]
    pub split: bool,

    /// Conformer searching options (see `obabel --conformer`)
    #[arg(long)]
    pub conformer_opts: Option<String>,

    /// Separate disconnected fragments into individual records
    #[arg(long, default_value_t = false)]
    pub separate: bool,

    /// Continue converting molecules after errors
    #[arg(short = 'e', long, default_value_t = false)]
    pub skip_errors: bool,

    #[command(flatten)]
    pub exec: ExecArgs,
}
