//! # conformer 命令实现
//!
//! 组装并运行 obconformer 构象搜索。
//!
//! 与 obminimize 相同，构象数据经 shell 重定向落盘，强制捕获
//! 保持关闭。
//!
//! ## 依赖关系
//! - 使用 `cli/conformer.rs` 定义的参数
//! - 使用 `cmdline/builder.rs`, `utils/output.rs`

use crate::cli::conformer::ConformerArgs;
use crate::cmdline::builder::ObconformerOptions;
use crate::error::Result;
use crate::utils::output;

/// 执行 conformer 命令
pub fn execute(args: ConformerArgs) -> Result<()> {
    output::print_header("Conformer Search (obconformer)");

    let opts = ObconformerOptions {
        input_file: args.input.clone(),
        output_file: args.output.clone(),
        num_conformers: args.nconf,
        steps: args.steps,
        force_field: args.force_field,
    };

    let descriptor = opts.descriptor();
    output::print_command(&descriptor.command);

    if args.exec.dry_run {
        super::print_args_table(&descriptor);
        output::print_info("Dry run: command not executed");
        return Ok(());
    }

    super::run_command(
        &descriptor.command,
        descriptor.display_name,
        &args.exec,
        false,
    )?;

    output::print_separator();
    output::print_done(&format!("Wrote '{}'", args.output.display()));
    Ok(())
}
