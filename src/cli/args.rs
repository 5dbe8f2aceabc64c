//! 命令行参数定义
//!
//! 使用clap定义应用程序的命令行接口

use clap::{Parser, ValueEnum};

/// hcheck - 并发HTTP健康检测工具
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hcheck",
    version = crate::VERSION,
    about = crate::APP_DESCRIPTION,
    long_about = None
)]
pub struct Args {
    /// 请求超时时间（毫秒）
    #[arg(
        short,
        long,
        value_name = "MILLIS",
        default_value_t = 1000,
        help = "请求超时时间（毫秒）",
        env = "HCHECK_TIMEOUT_MS"
    )]
    pub timeout: u64,

    /// 仅输出失败结果（非2xx或出错）
    #[arg(
        short,
        long,
        help = "仅输出失败结果",
        env = "HCHECK_ERRORS_ONLY"
    )]
    pub errors_only: bool,

    /// 日志级别
    #[arg(
        short,
        long,
        value_enum,
        default_value = "warn",
        help = "日志级别",
        env = "HCHECK_LOG_LEVEL"
    )]
    pub log_level: LogLevel,

    /// 待检测的URL列表
    ///
    /// 未提供任何URL时视为硬错误：打印用法说明到stderr并以非零状态退出。
    #[arg(value_name = "URL", required = true, num_args = 1..)]
    pub urls: Vec<String>,
}

/// 日志级别枚举
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum LogLevel {
    /// 调试级别
    Debug,
    /// 信息级别
    Info,
    /// 警告级别
    Warn,
    /// 错误级别
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}
