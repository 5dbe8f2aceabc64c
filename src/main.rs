//! hcheck 主程序入口
//!
//! 并发HTTP健康检测工具

use anyhow::{Context, Result};
use clap::Parser;
use hcheck::cli::args::Args;
use hcheck::cli::output::render_result;
use hcheck::health::{healthcheck, ClientConfig, HttpChecker};
use hcheck::logging::{setup_logging, LogConfig};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数；未提供URL时clap打印用法说明并以非零状态退出
    let args = Args::parse();

    // 初始化日志系统
    let log_config = LogConfig {
        level: args.log_level.clone().into(),
        ..Default::default()
    };
    setup_logging(&log_config).context("初始化日志系统失败")?;

    debug!("开始检测 {} 个URL，超时 {}ms", args.urls.len(), args.timeout);

    // 客户端配置每次运行构建一次，所有任务只读共享
    let config = ClientConfig::default().with_timeout(Duration::from_millis(args.timeout));
    let checker = Arc::new(HttpChecker::new(&config).context("创建HTTP检测器失败")?);

    let mut results = healthcheck(checker, args.urls);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    while let Some(result) = results.recv().await {
        if args.errors_only && result.success() {
            continue;
        }
        out.write_all(render_result(&result).as_bytes())
            .context("写入检测结果失败")?;
    }

    debug!("全部检测完成");
    Ok(())
}
