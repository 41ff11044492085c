//! # gen 命令实现
//!
//! 组装并运行 obgen 3D 几何生成。
//!
//! obgen 固定输出 SDF：先把 obgen 的结果经 shell 重定向写入唯一
//! 命名的临时文件，再由 obabel 把临时 SDF 转换成用户要求的输出
//! 格式，两条命令以 `&&` 串接、一次 shell 调用顺序执行，结束后
//! 删除临时文件。
//!
//! ## 依赖关系
//! - 使用 `cli/gen.rs` 定义的参数
//! - 使用 `cmdline/builder.rs`, `utils/output.rs`

use crate::cli::gen::GenArgs;
use crate::cmdline::builder::{chain_commands, ObabelOptions, ObgenOptions};
use crate::error::Result;
use crate::utils::output;

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static TMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// 唯一命名的中间 SDF 路径
fn temp_sdf_path() -> PathBuf {
    let n = TMP_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("obgen-{}-{}.sdf", std::process::id(), n))
}

/// 执行 gen 命令
pub fn execute(args: GenArgs) -> Result<()> {
    output::print_header("3D Geometry Generation (obgen)");

    let tmp_sdf = temp_sdf_path();
    // 占位空文件，避免中间文件在组装阶段触发缺失警告
    fs::write(&tmp_sdf, b"").ok();

    let gen_opts = ObgenOptions {
        input_file: args.input.clone(),
        output_file: tmp_sdf.clone(),
        force_field: args.force_field,
    };
    let conv_opts = ObabelOptions {
        input_file: tmp_sdf.clone(),
        output_file: args.output.clone(),
        input_format: Some("sdf".to_string()),
        ..Default::default()
    };

    let gen_descriptor = gen_opts.descriptor();
    let conv_descriptor = conv_opts.descriptor();
    let chained = chain_commands(&gen_descriptor, &conv_descriptor);
    output::print_command(&chained);

    if args.exec.dry_run {
        super::print_args_table(&gen_descriptor);
        super::print_args_table(&conv_descriptor);
        output::print_info("Dry run: command not executed");
        fs::remove_file(&tmp_sdf).ok();
        return Ok(());
    }

    let result = super::run_command(&chained, gen_descriptor.display_name, &args.exec, false);
    fs::remove_file(&tmp_sdf).ok();
    result?;

    output::print_separator();
    output::print_done(&format!("Wrote '{}'", args.output.display()));
    Ok(())
}
