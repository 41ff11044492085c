//! # 进程执行模块
//!
//! 外部进程的启动、流式输出捕获与重定向重建。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: runner (执行器), redirect (重定向检测)

pub mod redirect;
pub mod runner;
