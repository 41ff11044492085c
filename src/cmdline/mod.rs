//! # 命令行构建模块
//!
//! 把语义化的选项集合翻译成五个 Open Babel 可执行程序的完整命令行。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: args (片段映射), builder (组装器)

pub mod args;
pub mod builder;
