//! # energy 命令实现
//!
//! 组装并运行 obenergy 能量评估。
//!
//! 指定输出文件时能量报告经 shell 重定向落盘，流式模式下开启
//! 强制捕获，让报告既实时显示又最终写入文件。未指定输出文件时
//! 从捕获的输出中提取最后一行非空文本作为能量结论。
//!
//! ## 依赖关系
//! - 使用 `cli/energy.rs` 定义的参数
//! - 使用 `cmdline/builder.rs`, `exec/runner.rs`, `utils/output.rs`

use crate::cli::energy::EnergyArgs;
use crate::cmdline::builder::ObenergyOptions;
use crate::error::Result;
use crate::exec::runner::ProcessOutput;
use crate::utils::output;

/// 执行 energy 命令
pub fn execute(args: EnergyArgs) -> Result<()> {
    output::print_header("Energy Evaluation (obenergy)");

    let opts = ObenergyOptions {
        input_file: args.input.clone(),
        output_file: args.output.clone(),
        force_field: args.force_field,
        add_hydrogen: args.add_h,
        // obenergy 自身的 -v 跟随显示详情的要求
        verbose: args.components || args.exec.verbose,
    };

    let descriptor = opts.descriptor();
    output::print_command(&descriptor.command);

    if args.exec.dry_run {
        super::print_args_table(&descriptor);
        output::print_info("Dry run: command not executed");
        return Ok(());
    }

    let result = super::run_command(
        &descriptor.command,
        descriptor.display_name,
        &args.exec,
        true,
    )?;

    output::print_separator();
    match &args.output {
        Some(path) => output::print_done(&format!("Wrote '{}'", path.display())),
        None => match final_energy_line(&result) {
            Some(line) => output::print_success(&line),
            None => output::print_warning("obenergy produced no output to summarize"),
        },
    }

    Ok(())
}

/// 能量结论取输出的最后一行非空文本
fn final_energy_line(result: &ProcessOutput) -> Option<String> {
    result
        .transcript
        .iter()
        .rev()
        .find(|line| !line.trim().is_empty())
        .cloned()
        .or_else(|| {
            result
                .stdout
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .map(|line| line.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_energy_line_prefers_transcript() {
        let result = ProcessOutput {
            stdout: "ignored\n".to_string(),
            stderr: String::new(),
            transcript: vec![
                "A T O M   T Y P E S".to_string(),
                String::new(),
                "TOTAL ENERGY = 6.20396 kcal/mol".to_string(),
                String::new(),
            ],
            exit_code: Some(0),
        };
        assert_eq!(
            final_energy_line(&result).as_deref(),
            Some("TOTAL ENERGY = 6.20396 kcal/mol")
        );
    }

    #[test]
    fn test_final_energy_line_falls_back_to_stdout() {
        let result = ProcessOutput {
            stdout: "header\nTOTAL ENERGY = 1.5 kcal/mol\n".to_string(),
            stderr: String::new(),
            transcript: Vec::new(),
            exit_code: Some(0),
        };
        assert_eq!(
            final_energy_line(&result).as_deref(),
            Some("TOTAL ENERGY = 1.5 kcal/mol")
        );
    }

    #[test]
    fn test_final_energy_line_empty_output() {
        let result = ProcessOutput::default();
        assert!(final_energy_line(&result).is_none());
    }
}
