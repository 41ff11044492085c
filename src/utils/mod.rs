//! # 工具模块
//!
//! 终端输出与进度显示的辅助函数。

pub mod output;
pub mod progress;
