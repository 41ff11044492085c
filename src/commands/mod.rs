//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑：组装命令串、按执行参数运行、汇报结果。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `cmdline/`, `exec/`, `utils/`
//! - 子模块: convert, minimize, conformer, energy, gen

pub mod conformer;
pub mod convert;
pub mod energy;
pub mod gen;
pub mod minimize;

use crate::cli::{Commands, ExecArgs};
use crate::cmdline::builder::CommandDescriptor;
use crate::error::{ObtoolError, Result};
use crate::exec::redirect;
use crate::exec::runner::{self, OutputMode, ProcessOutput, StreamConfig};
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args),
        Commands::Minimize(args) => minimize::execute(args),
        Commands::Conformer(args) => conformer::execute(args),
        Commands::Energy(args) => energy::execute(args),
        Commands::Gen(args) => gen::execute(args),
    }
}

/// 参数表格行
#[derive(Tabled)]
struct ArgRow {
    #[tabled(rename = "Option")]
    name: &'static str,
    #[tabled(rename = "Fragment")]
    fragment: String,
}

/// 打印已解析的选项片段表（dry-run 时给用户核对）
pub(crate) fn print_args_table(descriptor: &CommandDescriptor) {
    let rows: Vec<ArgRow> = descriptor
        .args
        .iter()
        .map(|a| ArgRow {
            name: a.name,
            fragment: a.fragment.clone(),
        })
        .collect();
    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }
}

/// 由共用执行参数得出运行模式
fn output_mode(exec: &ExecArgs, tee_redirect: bool) -> OutputMode {
    if exec.verbose {
        OutputMode::Stream(StreamConfig {
            same_line: exec.same_line,
            tee_redirect,
        })
    } else {
        OutputMode::Quiet
    }
}

/// 统一的执行路径：运行命令并把非零退出码提升为 `CommandFailed`
///
/// `tee_redirect` 只对流式模式生效；含重定向或 `&&` 串接的命令
/// 必须经 shell 执行，此处会忽略 `--no-shell` 并提示。
pub(crate) fn run_command(
    command: &str,
    display_name: &str,
    exec: &ExecArgs,
    tee_redirect: bool,
) -> Result<ProcessOutput> {
    let mut shell = !exec.no_shell;
    if !shell && (redirect::contains_redirect(command) || command.contains("&&")) {
        output::print_warning("Command requires a shell (redirect or chaining); ignoring --no-shell");
        shell = true;
    }

    let mode = output_mode(exec, tee_redirect);
    let result = if exec.verbose {
        runner::run(command, display_name, shell, mode)?
    } else {
        let spinner = progress::create_spinner(&format!("Running {} ...", display_name));
        let result = runner::run(command, display_name, shell, mode);
        spinner.finish_and_clear();
        result?
    };

    if !result.success() {
        let code = result
            .exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "terminated by signal".to_string());
        let stderr = if result.stderr.trim().is_empty() {
            format!("exit code {}", code)
        } else {
            result.stderr.trim_end().to_string()
        };
        return Err(ObtoolError::CommandFailed {
            command: display_name.to_string(),
            stderr,
        });
    }

    Ok(result)
}
