//! 日志系统模块
//!
//! 提供基于tracing的日志配置和初始化

use log::LevelFilter;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// 日志配置结构
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别
    pub level: LevelFilter,
    /// 是否启用ANSI颜色
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            ansi: true,
        }
    }
}

/// 全局初始化状态，保证日志系统只初始化一次
static LOGGING_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// 初始化日志系统
///
/// 日志写入stderr，stdout保留给检测结果输出。
/// 线程安全的单次初始化，重复调用返回首次初始化的结果。
///
/// # 参数
/// * `config` - 日志配置
///
/// # 返回
/// * `Result<(), anyhow::Error>` - 初始化结果
pub fn setup_logging(config: &LogConfig) -> anyhow::Result<()> {
    let result = LOGGING_INIT.get_or_init(|| init_subscriber(config).map_err(|e| e.to_string()));

    result
        .as_ref()
        .map_err(|e| anyhow::anyhow!("日志系统初始化失败: {}", e))?;
    Ok(())
}

/// 执行实际的tracing subscriber初始化
fn init_subscriber(config: &LogConfig) -> anyhow::Result<()> {
    // log crate 到 tracing 的桥接
    tracing_log::LogTracer::init()?;

    let env_filter =
        EnvFilter::from_default_env().add_directive(convert_level_to_directive(config.level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(true);

    registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber初始化失败: {}", e))?;

    Ok(())
}

/// 将 log::LevelFilter 转换为 tracing 的指令
fn convert_level_to_directive(level: LevelFilter) -> tracing_subscriber::filter::Directive {
    use tracing_subscriber::filter::Directive;
    match level {
        LevelFilter::Off => "off".parse().unwrap(),
        LevelFilter::Error => Directive::from(tracing::Level::ERROR),
        LevelFilter::Warn => Directive::from(tracing::Level::WARN),
        LevelFilter::Info => Directive::from(tracing::Level::INFO),
        LevelFilter::Debug => Directive::from(tracing::Level::DEBUG),
        LevelFilter::Trace => Directive::from(tracing::Level::TRACE),
    }
}
