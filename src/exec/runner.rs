//! # 进程执行器
//!
//! 启动组装好的外部命令，按需逐行流式显示输出并同时缓冲，
//! 进程结束后把输出、转录与退出码打包返回。
//!
//! 外部程序以非零状态码退出不会产生 `Err`，退出码作为数据交给
//! 调用方判断；唯一的硬错误是进程根本无法启动。同步阻塞执行，
//! 主线程逐行读取流式管道直至 EOF，无超时、无取消。
//!
//! ## 流的合并
//! - shell 模式且命令中无残留重定向：追加 ` 2>&1`，流式管道同时
//!   携带 stdout 和 stderr
//! - shell 模式且命令仍含重定向（obminimize/obconformer，分子数据
//!   经 shell 流向文件）：改为流式读取 stderr
//! - 直接模式：流式读取 stdout，stderr 由辅助线程同步排空
//!
//! 流式模式下未被显示的那条管道始终由辅助线程排空。管道缓冲区
//! 只有几十 KB，子进程写满后会阻塞，而这里还在等另一条管道的
//! EOF，两边互相等待就卡死了。
//!
//! ## 依赖关系
//! - 使用 `exec/redirect.rs` 检测并剥离重定向
//! - 使用 `utils/output.rs` 打印带前缀的进程输出
//! - 使用 `shlex` crate 在直接模式下切分命令串
//! - 被 `commands/` 模块使用

use crate::error::{ObtoolError, Result};
use crate::exec::redirect;
use crate::utils::output;

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};

/// 流式显示配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamConfig {
    /// 原地覆盖式单行显示
    pub same_line: bool,
    /// 强制捕获：剥离命令内嵌的重定向，结束后把转录写回目标文件
    pub tee_redirect: bool,
}

/// 执行模式。tee 只在流式模式下可表达，布尔组合的约束由类型保证
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// 不流式显示，进程结束后一次性收集输出
    #[default]
    Quiet,
    /// 逐行流式显示并缓冲
    Stream(StreamConfig),
}

/// 进程执行结果，全部失败信息以数据形式呈现
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// 标准输出全文（流式模式下等于转录拼接）
    pub stdout: String,
    /// 标准错误全文
    pub stderr: String,
    /// 流式模式下缓冲的逐行转录
    pub transcript: Vec<String>,
    /// 退出码；被信号终止时为 `None`
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// 流式读取的来源管道
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamSource {
    Stdout,
    Stderr,
}

/// 执行一条命令并收集结果
///
/// - `command`: 完整命令行字符串
/// - `display_name`: 输出前缀与失败提示使用的显示名
/// - `shell`: 经 `sh -c`（Windows 为 `cmd /C`）执行，或直接执行
/// - `mode`: 静默或流式
pub fn run(
    command: &str,
    display_name: &str,
    shell: bool,
    mode: OutputMode,
) -> Result<ProcessOutput> {
    // 强制捕获时先剥离命令内嵌的重定向，让输出进管道而不是文件
    let (command, tee_target) = match mode {
        OutputMode::Stream(sc) if sc.tee_redirect => match redirect::split_redirect(command)? {
            Some((stripped, r)) => (stripped, Some(r)),
            None => (command.to_string(), None),
        },
        _ => (command.to_string(), None),
    };

    let stream_source = match mode {
        OutputMode::Quiet => None,
        OutputMode::Stream(_) => {
            if shell && redirect::contains_redirect(&command) {
                Some(StreamSource::Stderr)
            } else {
                Some(StreamSource::Stdout)
            }
        }
    };

    // shell 模式下无残留重定向时合并两个流
    let merge_streams = shell && stream_source == Some(StreamSource::Stdout);
    let mut child = spawn(&command, shell, merge_streams)?;

    let result = match (mode, stream_source) {
        (OutputMode::Stream(sc), Some(source)) => {
            stream_child(&mut child, display_name, source, sc)?
        }
        _ => {
            let raw = child
                .wait_with_output()
                .map_err(|e| ObtoolError::ProcessReadError {
                    command: display_name.to_string(),
                    source: e,
                })?;
            ProcessOutput {
                stdout: String::from_utf8_lossy(&raw.stdout).to_string(),
                stderr: String::from_utf8_lossy(&raw.stderr).to_string(),
                transcript: Vec::new(),
                exit_code: raw.status.code(),
            }
        }
    };

    // 退出码非零时只提示一行；成功时保持安静
    if stream_source.is_some() && !result.success() {
        output::print_warning(&failure_notice(display_name, result.exit_code));
    }

    // 进程结束后重现被剥离的重定向
    if let Some(target) = &tee_target {
        redirect::write_transcript(target, &result.transcript)?;
    }

    Ok(result)
}

/// 逐行流式显示一条管道，另一条由辅助线程排空
fn stream_child(
    child: &mut Child,
    display_name: &str,
    source: StreamSource,
    sc: StreamConfig,
) -> Result<ProcessOutput> {
    let stdout = child.stdout.take().ok_or_else(|| pipe_error(display_name))?;
    let stderr = child.stderr.take().ok_or_else(|| pipe_error(display_name))?;
    let (reader, drained): (Box<dyn BufRead>, _) = match source {
        StreamSource::Stdout => (Box::new(BufReader::new(stdout)), drain_pipe(stderr)),
        StreamSource::Stderr => (Box::new(BufReader::new(stderr)), drain_pipe(stdout)),
    };

    // 阻塞逐行读取，进程结束关闭管道即到达 EOF
    let mut transcript = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| ObtoolError::ProcessReadError {
            command: display_name.to_string(),
            source: e,
        })?;
        let line = line.trim_end().to_string();
        if !line.is_empty() {
            output::print_process_line(display_name, &line, sc.same_line);
        }
        transcript.push(line);
    }

    // 单行模式结束后补一个换行，免得后续输出叠在进度行上
    if sc.same_line && !transcript.is_empty() {
        println!();
    }

    let side = drained.join().unwrap_or_default();
    let side = String::from_utf8_lossy(&side).to_string();
    let status = child.wait().map_err(|e| ObtoolError::ProcessReadError {
        command: display_name.to_string(),
        source: e,
    })?;

    let streamed = join_lines(&transcript);
    let (stdout_text, stderr_text) = match source {
        StreamSource::Stdout => (streamed, side),
        StreamSource::Stderr => (side, streamed),
    };
    Ok(ProcessOutput {
        stdout: stdout_text,
        stderr: stderr_text,
        transcript,
        exit_code: status.code(),
    })
}

/// 在辅助线程上把一条管道读到 EOF，防止子进程写满缓冲区后阻塞
fn drain_pipe<R>(mut pipe: R) -> std::thread::JoinHandle<Vec<u8>>
where
    R: std::io::Read + Send + 'static,
{
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

/// 非零退出时的单行提示文本
fn failure_notice(display_name: &str, exit_code: Option<i32>) -> String {
    let code = exit_code
        .map(|c| c.to_string())
        .unwrap_or_else(|| "terminated by signal".to_string());
    format!(
        "Process ({}) terminated with exit code ({})",
        display_name, code
    )
}

/// 启动子进程，stdout/stderr 均接管道
fn spawn(command: &str, shell: bool, merge_streams: bool) -> Result<Child> {
    let mut cmd = if shell {
        let line = if merge_streams {
            format!("{} 2>&1", command)
        } else {
            command.to_string()
        };
        shell_command(&line)
    } else {
        let tokens = shlex::split(command).ok_or_else(|| {
            ObtoolError::InvalidArgument(format!("Unparsable command line: {}", command))
        })?;
        let (program, args) = tokens.split_first().ok_or_else(|| {
            ObtoolError::InvalidArgument("Empty command line".to_string())
        })?;
        let mut c = Command::new(program);
        c.args(args);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    cmd.spawn().map_err(|_| ObtoolError::CommandNotFound {
        command: command
            .split_whitespace()
            .next()
            .unwrap_or(command)
            .to_string(),
    })
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut c = Command::new("cmd");
    c.args(["/C", line]);
    c
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut c = Command::new("sh");
    c.args(["-c", line]);
    c
}

fn pipe_error(command: &str) -> ObtoolError {
    ObtoolError::ProcessReadError {
        command: command.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdio pipe not captured"),
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    fn stream(tee: bool) -> OutputMode {
        OutputMode::Stream(StreamConfig {
            same_line: false,
            tee_redirect: tee,
        })
    }

    #[test]
    fn test_quiet_run_captures_stdout() {
        let result = run("printf 'hi there\\n'", "Shell", true, OutputMode::Quiet).unwrap();
        assert!(result.success());
        assert_eq!(result.stdout, "hi there\n");
        assert!(result.transcript.is_empty());
    }

    #[test]
    fn test_nonzero_exit_is_data_not_error() {
        let result = run("exit 3", "Shell", true, OutputMode::Quiet).unwrap();
        assert!(!result.success());
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn test_streaming_buffers_transcript_in_order() {
        let result = run("printf 'alpha\\nbeta\\n'", "Shell", true, stream(false)).unwrap();
        assert!(result.success());
        assert_eq!(result.transcript, vec!["alpha".to_string(), "beta".to_string()]);
        assert_eq!(result.stdout, "alpha\nbeta\n");
    }

    #[test]
    fn test_streaming_merges_stderr() {
        let result = run("printf 'oops\\n' >&2; true", "Shell", true, stream(false)).unwrap();
        // `>&2` 残留重定向，改为流式读取 stderr
        assert!(result.success());
        assert_eq!(result.transcript, vec!["oops".to_string()]);
    }

    #[test]
    fn test_tee_redirect_reproduces_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("captured.txt");
        let command = format!("printf 'line 1\\nline 2\\n' > \"{}\"", target.display());

        let result = run(&command, "Shell", true, stream(true)).unwrap();
        assert!(result.success());
        assert_eq!(
            result.transcript,
            vec!["line 1".to_string(), "line 2".to_string()]
        );
        // 文件内容与流式显示的行完全一致，顺序保留，不重复
        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            "line 1\nline 2\n"
        );
    }

    #[test]
    fn test_tee_append_redirect() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("log.txt");
        std::fs::write(&target, "old\n").unwrap();

        let command = format!("printf 'new\\n' >> \"{}\"", target.display());
        let result = run(&command, "Shell", true, stream(true)).unwrap();
        assert!(result.success());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "old\nnew\n");
    }

    #[test]
    fn test_streaming_drains_bulky_stderr_without_stalling() {
        // stderr 先写 200 KB，远超管道缓冲区，之后才关闭 stdout；
        // 未排空 stderr 的话子进程会卡在写端，这里卡在读端
        let command = r#"sh -c 'head -c 200000 /dev/zero | tr "\0" e 1>&2; echo done'"#;
        let result = run(command, "Shell", false, stream(false)).unwrap();
        assert!(result.success());
        assert_eq!(result.transcript, vec!["done".to_string()]);
        assert!(result.stderr.len() >= 200000);
    }

    #[test]
    fn test_redirect_streaming_drains_bulky_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("big.txt");
        let command = format!(
            "head -c 200000 /dev/zero | tr \"\\0\" e; printf 'done\\n' > \"{}\"",
            target.display()
        );
        // 命令含重定向，流式读取 stderr，stdout 上的 200 KB 由辅助线程排空
        let result = run(&command, "Shell", true, stream(false)).unwrap();
        assert!(result.success());
        assert!(result.stdout.len() >= 200000);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "done\n");
    }

    #[test]
    fn test_streaming_failure_keeps_exit_code_as_data() {
        let result = run("printf 'x\\n'; exit 1", "Shell", true, stream(false)).unwrap();
        assert!(!result.success());
        assert_eq!(result.exit_code, Some(1));
        assert_eq!(result.transcript, vec!["x".to_string()]);
    }

    #[test]
    fn test_failure_notice_names_process_and_code() {
        assert_eq!(
            failure_notice("OpenBabel", Some(1)),
            "Process (OpenBabel) terminated with exit code (1)"
        );
    }

    #[test]
    fn test_failure_notice_for_signal_termination() {
        assert_eq!(
            failure_notice("OpenBabel", None),
            "Process (OpenBabel) terminated with exit code (terminated by signal)"
        );
    }

    #[test]
    fn test_direct_exec_without_shell() {
        let result = run("echo direct", "Shell", false, OutputMode::Quiet).unwrap();
        assert!(result.success());
        assert_eq!(result.stdout, "direct\n");
    }

    #[test]
    fn test_unresolvable_executable_is_startup_error() {
        let err = run(
            "definitely-not-a-real-command-xyz",
            "Shell",
            false,
            OutputMode::Quiet,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ObtoolError::CommandNotFound { .. }
        ));
    }

    #[test]
    fn test_ambiguous_redirect_rejected_under_tee() {
        let err = run("printf 'x' > a.txt > b.txt", "Shell", true, stream(true)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ObtoolError::AmbiguousRedirect { .. }
        ));
    }
}
