//! # 重定向检测与剥离
//!
//! 强制捕获（tee）模式下，命令串里内嵌的 `>` / `>>` 会把外部程序的
//! 输出直接送进文件而绕过管道。这里负责识别唯一的重定向操作符、
//! 剥离它得到可捕获的命令，并在进程结束后把缓冲的转录写回目标
//! 文件，重现重定向的效果。
//!
//! 约定：命令串中最多允许一个重定向操作符且必须带一个结尾路径。
//! 出现多个操作符一律拒绝（`AmbiguousRedirect`），不做猜测。
//!
//! ## 依赖关系
//! - 被 `exec/runner.rs` 使用
//! - 使用 `regex` crate

use crate::error::{ObtoolError, Result};

use regex::Regex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// 从命令串中剥离出来的重定向目标
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub target: PathBuf,
    /// `>>` 追加，`>` 覆盖
    pub append: bool,
}

/// 命令串中是否残留重定向操作符
pub fn contains_redirect(command: &str) -> bool {
    command.contains('>')
}

/// 识别并剥离命令串末尾的重定向
///
/// 返回 `(剥离后的命令, 重定向目标)`；无重定向时返回 `None`。
/// 操作符多于一个或缺少目标路径时报错。
pub fn split_redirect(command: &str) -> Result<Option<(String, Redirect)>> {
    let operator = Regex::new(r">>?").unwrap();
    match operator.find_iter(command).count() {
        0 => return Ok(None),
        1 => {}
        _ => {
            return Err(ObtoolError::AmbiguousRedirect {
                command: command.to_string(),
            })
        }
    }

    // 操作符后允许带引号或裸写的目标路径，且必须位于命令末尾
    let tail = Regex::new(r#"(>>|>)\s*(?:"([^"]+)"|'([^']+)'|([^\s"']+))\s*$"#).unwrap();
    let caps = tail
        .captures(command)
        .ok_or_else(|| ObtoolError::MalformedRedirect {
            command: command.to_string(),
        })?;

    let matched = caps.get(0).map(|m| m.start()).unwrap_or(0);
    let append = &caps[1] == ">>";
    let target = caps
        .get(2)
        .or_else(|| caps.get(3))
        .or_else(|| caps.get(4))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ObtoolError::MalformedRedirect {
            command: command.to_string(),
        })?;

    let stripped = command[..matched].trim_end().to_string();
    Ok(Some((
        stripped,
        Redirect {
            target: PathBuf::from(target),
            append,
        },
    )))
}

/// 把缓冲的转录行写入重定向目标，重现 `>` / `>>` 的效果
pub fn write_transcript(redirect: &Redirect, lines: &[String]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(redirect.append)
        .truncate(!redirect.append)
        .open(&redirect.target)
        .map_err(|e| ObtoolError::FileWriteError {
            path: redirect.target.display().to_string(),
            source: e,
        })?;

    for line in lines {
        writeln!(file, "{}", line).map_err(|e| ObtoolError::FileWriteError {
            path: redirect.target.display().to_string(),
            source: e,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_redirect() {
        let result = split_redirect("obabel \"a.sdf\" -O \"a.pdb\"").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_overwrite_redirect_with_quoted_path() {
        let (stripped, redirect) =
            split_redirect("obenergy -ff GAFF \"mol.sdf\" > \"energy.txt\"")
                .unwrap()
                .unwrap();
        assert_eq!(stripped, "obenergy -ff GAFF \"mol.sdf\"");
        assert_eq!(redirect.target, PathBuf::from("energy.txt"));
        assert!(!redirect.append);
    }

    #[test]
    fn test_append_redirect() {
        let (stripped, redirect) = split_redirect("obenergy \"m.sdf\" >> log.txt")
            .unwrap()
            .unwrap();
        assert_eq!(stripped, "obenergy \"m.sdf\"");
        assert_eq!(redirect.target, PathBuf::from("log.txt"));
        assert!(redirect.append);
    }

    #[test]
    fn test_bare_path_glued_to_operator() {
        let (stripped, redirect) = split_redirect("obgen \"in.smi\" >out.sdf").unwrap().unwrap();
        assert_eq!(stripped, "obgen \"in.smi\"");
        assert_eq!(redirect.target, PathBuf::from("out.sdf"));
    }

    #[test]
    fn test_multiple_redirects_rejected() {
        let err = split_redirect("cmd > a.txt > b.txt").unwrap_err();
        assert!(matches!(
            err,
            crate::error::ObtoolError::AmbiguousRedirect { .. }
        ));
    }

    #[test]
    fn test_operator_without_target_rejected() {
        let err = split_redirect("obenergy \"m.sdf\" >").unwrap_err();
        assert!(matches!(
            err,
            crate::error::ObtoolError::MalformedRedirect { .. }
        ));
    }

    #[test]
    fn test_write_transcript_overwrite_and_append() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");
        let redirect = Redirect {
            target: target.clone(),
            append: false,
        };

        write_transcript(&redirect, &["line 1".into(), "line 2".into()]).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "line 1\nline 2\n");

        // 覆盖模式重写
        write_transcript(&redirect, &["only".into()]).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "only\n");

        // 追加模式
        let appending = Redirect {
            target: target.clone(),
            append: true,
        };
        write_transcript(&appending, &["more".into()]).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "only\nmore\n");
    }
}
