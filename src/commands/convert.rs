//! # convert 命令实现
//!
//! 组装并运行 obabel 格式转换。
//!
//! obabel 自带 `-O` 输出选项，命令串中不含 shell 重定向；流式模式
//! 下开启强制捕获（tee）仅作为兜底，对正常转换无副作用。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `cmdline/builder.rs`, `utils/output.rs`

use crate::cli::convert::ConvertArgs;
use crate::cmdline::builder::ObabelOptions;
use crate::error::{ObtoolError, Result};
use crate::utils::output;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Format Conversion (obabel)");

    let add_property = match &args.property {
        Some(kv) if kv.len() == 2 => Some((kv[0].clone(), kv[1].clone())),
        Some(_) => {
            return Err(ObtoolError::InvalidArgument(
                "--property takes exactly NAME VALUE".to_string(),
            ))
        }
        None => None,
    };

    let opts = ObabelOptions {
        input_file: args.input.clone(),
        output_file: args.output.clone(),
        input_format: args.in_format.clone(),
        output_format: args.out_format.clone(),
        generate_2d: args.gen2d,
        generate_3d: args.gen3d,
        add_hydrogen: args.add_h,
        delete_hydrogens: args.delete_h,
        add_props: args.add_props.clone(),
        add_property,
        center: args.center,
        charge_calc_method: args.partial_charge.clone(),
        combine_conformers: args.read_conformers,
        convert_dative: args.dative,
        join_all_to_one_file: args.join,
        ph: args.ph,
        rename_molecule: args.title.clone(),
        save_separate_conformers: args.write_conformers,
        save_separate_files: args.split,
        search_conformers: args.conformer_opts.clone(),
        separate_fragments: args.separate,
        skip_conversion_error: args.skip_errors,
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
        true,
    )?;

    output::print_separator();
    output::print_done(&format!("Wrote '{}'", args.output.display()));
    Ok(())
}
