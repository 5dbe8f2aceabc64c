//! 命令行接口模块
//!
//! 提供CLI参数解析和结果输出功能

pub mod args;
pub mod output;

// 重新导出主要类型
pub use args::{Args, LogLevel};
pub use output::render_result;
