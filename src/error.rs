//! 错误处理模块
//!
//! 定义应用程序的统一错误类型和单次检测的错误分类

use thiserror::Error;

/// hcheck 应用程序的主要错误类型
#[derive(Error, Debug)]
pub enum HcheckError {
    /// HTTP客户端构建失败
    #[error("HTTP客户端构建失败: {0}")]
    ClientBuild(#[from] reqwest::Error),

    /// 其他错误
    #[error("其他错误: {0}")]
    Other(#[from] anyhow::Error),
}

/// 单次检测的错误分类
///
/// 每个任务的错误只记录到该任务自己的检测结果中，
/// 不会作为程序级错误传播，也不会中断其他进行中的任务。
#[derive(Error, Debug)]
pub enum CheckError {
    /// URL解析失败，未发起网络请求
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// 请求在配置的超时时间内未完成
    #[error("request timeout")]
    Timeout,

    /// 重定向次数超过上限
    #[error("stopped after {0} redirects")]
    TooManyRedirects(usize),

    /// 其他传输层错误（DNS解析、连接拒绝、TLS等）
    #[error("{0}")]
    Transport(String),
}

impl CheckError {
    /// 判断是否为超时类错误
    pub fn is_timeout(&self) -> bool {
        matches!(self, CheckError::Timeout)
    }

    /// 将reqwest请求错误归类为检测错误
    ///
    /// # 参数
    /// * `error` - reqwest返回的请求错误
    /// * `max_redirects` - 客户端配置的重定向上限，用于重定向错误的展示
    ///
    /// # 返回
    /// * `Self` - 归类后的检测错误
    pub fn from_request_error(error: &reqwest::Error, max_redirects: usize) -> Self {
        if error.is_timeout() {
            return CheckError::Timeout;
        }
        if error.is_redirect() {
            return CheckError::TooManyRedirects(max_redirects);
        }

        let chain = error_chain(error);
        CheckError::Transport(classify_transport(
            &chain,
            error.is_connect(),
            error.is_request(),
        ))
    }
}

/// 拼接错误及其全部来源链的描述
///
/// reqwest错误的Display通常不包含来源信息，DNS、TLS等细节
/// 藏在来源链深处，需要逐层展开后才能做子串匹配。
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

/// 根据完整错误链描述归类传输层错误
fn classify_transport(chain: &str, is_connect: bool, is_request: bool) -> String {
    if chain.contains("dns") || chain.contains("DNS") {
        "DNS resolution failed".to_string()
    } else if is_connect {
        "connection failed".to_string()
    } else if chain.contains("certificate") || chain.contains("tls") || chain.contains("ssl") {
        "SSL/TLS error".to_string()
    } else if is_request {
        "invalid request".to_string()
    } else {
        format!("request failed: {chain}")
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, HcheckError>;
