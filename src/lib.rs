//! hcheck - 并发HTTP健康检测工具
//!
//! 对一批URL并发执行HTTP GET检测，支持：
//! - 单请求超时控制（默认1000毫秒）
//! - 重定向次数上限（默认10次），每一跳都携带标识性User-Agent
//! - 结果按完成顺序流式回传，互不阻塞
//! - 仅输出失败结果的过滤

pub mod cli;
pub mod error;
pub mod health;
pub mod logging;

// 重新导出主要类型
pub use error::{CheckError, HcheckError};
pub use health::{healthcheck, CheckResult, ClientConfig, HealthChecker, HttpChecker};

/// 应用程序版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用程序名称
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// 应用程序描述
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
