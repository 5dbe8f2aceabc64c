//! 检测结果输出
//!
//! 将检测结果渲染为单行文本，三种形态：超时、错误、状态行

use crate::health::result::CheckResult;

/// 渲染一条检测结果为输出行（含换行符）
///
/// # 参数
/// * `result` - 检测结果
///
/// # 返回
/// * `String` - 渲染后的输出行
pub fn render_result(result: &CheckResult) -> String {
    if let Some(ref error) = result.error {
        if error.is_timeout() {
            return format!("timeout: {} \n", result.url);
        }
        return format!("error: {} ({}) \n", error, result.url);
    }

    let status_line = result
        .response
        .as_ref()
        .map(|response| response.status_line())
        .unwrap_or_else(|| "unknown".to_string());

    format!("{} ({}ms) - {}\n", status_line, result.duration_ms(), result.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use crate::health::result::ResponseSummary;
    use std::time::Duration;

    #[test]
    fn test_render_success_line() {
        let result = CheckResult::new("http://example.com/")
            .with_response(ResponseSummary::new(200))
            .with_duration(Duration::from_millis(42));

        assert_eq!(
            render_result(&result),
            "200 OK (42ms) - http://example.com/\n"
        );
    }

    #[test]
    fn test_render_non_2xx_as_status_line() {
        // 非2xx响应按正常状态行输出，不按错误输出
        let result = CheckResult::new("http://example.com/missing")
            .with_response(ResponseSummary::new(404))
            .with_duration(Duration::from_millis(7));

        assert_eq!(
            render_result(&result),
            "404 Not Found (7ms) - http://example.com/missing\n"
        );
    }

    #[test]
    fn test_render_timeout_line() {
        let result = CheckResult::new("http://slow.test/")
            .with_error(CheckError::Timeout)
            .with_duration(Duration::from_millis(1000));

        assert_eq!(render_result(&result), "timeout: http://slow.test/ \n");
    }

    #[test]
    fn test_render_error_line() {
        let result = CheckResult::new("http://nosuchhost.invalid/")
            .with_error(CheckError::Transport("DNS resolution failed".to_string()))
            .with_duration(Duration::from_millis(12));

        assert_eq!(
            render_result(&result),
            "error: DNS resolution failed (http://nosuchhost.invalid/) \n"
        );
    }

    #[test]
    fn test_render_invalid_url_line() {
        let result = CheckResult::new("not a url")
            .with_error(CheckError::InvalidUrl("relative URL without a base".to_string()));

        assert_eq!(
            render_result(&result),
            "error: invalid URL: relative URL without a base (not a url) \n"
        );
    }
}
