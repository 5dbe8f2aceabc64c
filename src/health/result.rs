//! 健康检测结果数据结构
//!
//! 定义单个URL检测的结果类型和成功判定

use crate::error::CheckError;
use reqwest::StatusCode;
use std::time::Duration;

/// HTTP响应摘要
///
/// 只保留判定和展示所需的状态信息，响应体不读取。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSummary {
    /// HTTP状态码
    pub status_code: u16,
}

impl ResponseSummary {
    /// 创建新的响应摘要
    pub fn new(status_code: u16) -> Self {
        Self { status_code }
    }

    /// 状态行文本，如 "200 OK"
    pub fn status_line(&self) -> String {
        let reason = StatusCode::from_u16(self.status_code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown");
        format!("{} {}", self.status_code, reason)
    }

    /// 状态码是否在2xx范围内
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// 单个URL的检测结果
///
/// 每个结果在任务开始时创建，由其所属任务填充一次后发送到结果通道，
/// 发送之后不再修改。成功响应与错误互斥，但非2xx响应属于有效响应而非错误。
#[derive(Debug)]
pub struct CheckResult {
    /// 被检测的URL，任务开始时设置
    pub url: String,
    /// HTTP响应摘要（请求在传输层完成时存在）
    pub response: Option<ResponseSummary>,
    /// 检测错误（请求未完成时存在）
    pub error: Option<CheckError>,
    /// 从发起请求到完成或失败的耗时（请求未发起时为None）
    pub duration: Option<Duration>,
}

impl CheckResult {
    /// 创建新的检测结果
    ///
    /// # 参数
    /// * `url` - 被检测的URL
    ///
    /// # 返回
    /// * `Self` - 检测结果实例
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            response: None,
            error: None,
            duration: None,
        }
    }

    /// 设置响应摘要
    pub fn with_response(mut self, response: ResponseSummary) -> Self {
        self.response = Some(response);
        self
    }

    /// 设置检测错误
    pub fn with_error(mut self, error: CheckError) -> Self {
        self.error = Some(error);
        self
    }

    /// 设置请求耗时
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// 判定检测是否成功：无错误且状态码在2xx范围内
    pub fn success(&self) -> bool {
        if self.error.is_some() {
            return false;
        }
        self.response.as_ref().is_some_and(ResponseSummary::is_success)
    }

    /// 获取耗时（整数毫秒），未发起请求时为0
    pub fn duration_ms(&self) -> u64 {
        self.duration.unwrap_or_default().as_millis() as u64
    }
}
