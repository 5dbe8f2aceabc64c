//! HTTP客户端配置
//!
//! 定义所有检测任务共享的客户端配置，并据此构建reqwest客户端

use crate::error::{HcheckError, Result};
use reqwest::{redirect, Client};
use std::time::Duration;

/// 默认请求超时时间（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// 默认最大重定向次数
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// 默认的User-Agent字符串，标识工具名称与版本
pub fn default_user_agent() -> String {
    format!("{}/{}", crate::APP_NAME, crate::VERSION)
}

/// 共享的HTTP客户端配置
///
/// 每次运行构建一次，所有并发任务只读共享，不持有任何请求级可变状态。
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 单个请求的超时时间（覆盖连接建立到完整往返）
    pub timeout: Duration,
    /// 最大重定向次数，超出后请求失败
    pub max_redirects: usize,
    /// User-Agent请求头值
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// 设置请求超时时间
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 构建共享的reqwest客户端
    ///
    /// User-Agent作为客户端默认请求头安装，reqwest在每次重定向跳转时
    /// 会重新应用默认请求头，因此每一跳都携带该标识。
    ///
    /// # 返回
    /// * `Result<Client>` - 客户端实例
    pub fn build_client(&self) -> Result<Client> {
        let max_redirects = self.max_redirects;
        let policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= max_redirects {
                attempt.error(format!("stopped after {max_redirects} redirects"))
            } else {
                attempt.follow()
            }
        });

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .redirect(policy)
            .build()
            .map_err(HcheckError::ClientBuild)?;

        Ok(client)
    }
}
