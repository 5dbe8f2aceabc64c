//! 健康检测模块
//!
//! 提供HTTP客户端配置、单URL检测和并发调度功能

pub mod checker;
pub mod client;
pub mod dispatcher;
pub mod result;

// 重新导出主要类型
pub use checker::{HealthChecker, HttpChecker};
pub use client::{default_user_agent, ClientConfig};
pub use dispatcher::healthcheck;
pub use result::{CheckResult, ResponseSummary};
