//! # minimize 命令实现
//!
//! 组装并运行 obminimize 几何最小化。
//!
//! obminimize 的分子数据经 shell 重定向写入输出文件，强制捕获
//! 必须保持关闭，否则会把分子数据当作日志截走；流式模式下读取
//! 的是 stderr 上的迭代日志。
//!
//! ## 依赖关系
//! - 使用 `cli/minimize.rs` 定义的参数
//! - 使用 `cmdline/builder.rs`, `utils/output.rs`

use crate::cli::minimize::MinimizeArgs;
use crate::cmdline::builder::ObminimizeOptions;
use crate::error::Result;
use crate::utils::output;

/// 执行 minimize 命令
pub fn execute(args: MinimizeArgs) -> Result<()> {
    output::print_header("Geometry Minimization (obminimize)");

    let opts = ObminimizeOptions {
        input_file: args.input.clone(),
        output_file: args.output.clone(),
        steps: args.steps,
        algorithm: args.algorithm,
        force_field: args.force_field,
        output_format: args.out_format.clone(),
        add_hydrogen: args.add_h,
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
