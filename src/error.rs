//! # 统一错误处理模块
//!
//! 定义 obtool 的所有错误类型，使用 `thiserror` 派生。
//!
//! 注意：被包装的外部程序以非零状态码退出不属于这里的错误：退出码
//! 作为数据保存在 `ProcessOutput` 中，由调用方决定如何处理
//! （`commands/` 层会将其提升为 `CommandFailed`）。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// obtool 统一错误类型
#[derive(Error, Debug)]
pub enum ObtoolError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Failed to read output from '{command}'")]
    ProcessReadError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 重定向解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Ambiguous redirect: more than one '>'/'>>' in command: {command}")]
    AmbiguousRedirect { command: String },

    #[error("Malformed redirect: operator without a target path in command: {command}")]
    MalformedRedirect { command: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ObtoolError>;
