//! HTTP健康检测器实现
//!
//! 提供单URL的HTTP GET检测和错误归类

use crate::error::{CheckError, Result};
use crate::health::client::ClientConfig;
use crate::health::result::{CheckResult, ResponseSummary};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Instant;
use tracing::debug;

/// 健康检测器trait，定义检测接口
#[async_trait]
pub trait HealthChecker: Send + Sync {
    /// 对单个URL执行一次GET检测
    ///
    /// # 参数
    /// * `url` - 待检测的URL
    ///
    /// # 返回
    /// * `CheckResult` - 检测结果，错误记录在结果内而非向上传播
    async fn check(&self, url: &str) -> CheckResult;
}

/// 基于reqwest的HTTP健康检测器
pub struct HttpChecker {
    /// 共享HTTP客户端
    client: Client,
    /// 重定向上限，用于错误归类时的展示
    max_redirects: usize,
}

impl HttpChecker {
    /// 创建新的HTTP健康检测器
    ///
    /// # 参数
    /// * `config` - 客户端配置
    ///
    /// # 返回
    /// * `Result<Self>` - 检测器实例
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: config.build_client()?,
            max_redirects: config.max_redirects,
        })
    }

    /// 并发检测一批URL，按输入顺序返回全部结果
    ///
    /// 适用于需要与输入顺序对应的调用方；
    /// 流式按完成顺序消费请使用 [`crate::health::dispatcher::healthcheck`]。
    pub async fn check_batch(&self, urls: &[String]) -> Vec<CheckResult> {
        let futures = urls.iter().map(|url| self.check(url));
        futures::future::join_all(futures).await
    }
}

#[async_trait]
impl HealthChecker for HttpChecker {
    async fn check(&self, url: &str) -> CheckResult {
        let result = CheckResult::new(url);

        // URL解析失败时不发起网络请求，耗时保持未设置
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("URL解析失败: {url}: {e}");
                return result.with_error(CheckError::InvalidUrl(e.to_string()));
            }
        };

        let start = Instant::now();
        match self.client.get(parsed).send().await {
            Ok(response) => {
                let status = response.status();
                debug!("请求完成: {url} -> {status}");
                result
                    .with_duration(start.elapsed())
                    .with_response(ResponseSummary::new(status.as_u16()))
            }
            Err(e) => {
                debug!("请求失败: {url}: {e}");
                result
                    .with_duration(start.elapsed())
                    .with_error(CheckError::from_request_error(&e, self.max_redirects))
            }
        }
    }
}
