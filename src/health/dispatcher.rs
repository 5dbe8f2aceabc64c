//! 并发调度模块
//!
//! 为每个URL派发一个并发检测任务，通过通道按完成顺序回传结果

use crate::health::checker::HealthChecker;
use crate::health::result::CheckResult;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error};

/// 并发检测一批URL，立即返回结果接收端
///
/// 每个URL对应一个独立任务，结果按完成顺序写入通道，与输入顺序无关，
/// 需要对应关系的调用方应通过结果中的 `url` 字段关联。
/// 通道容量等于URL数量，生产端不会因消费端消费缓慢而阻塞。
/// 全部任务结束后通道关闭，接收端迭代随之终止。
///
/// # 参数
/// * `checker` - 共享的健康检测器
/// * `urls` - 待检测的URL列表
///
/// # 返回
/// * `mpsc::Receiver<CheckResult>` - 检测结果接收端
pub fn healthcheck(
    checker: Arc<dyn HealthChecker>,
    urls: Vec<String>,
) -> mpsc::Receiver<CheckResult> {
    let (tx, rx) = mpsc::channel(urls.len().max(1));

    tokio::spawn(async move {
        let mut tasks = JoinSet::new();
        for url in urls {
            let checker = Arc::clone(&checker);
            let tx = tx.clone();
            tasks.spawn(async move {
                let result = checker.check(&url).await;
                if tx.send(result).await.is_err() {
                    debug!("结果接收端已关闭，丢弃检测结果: {url}");
                }
            });
        }
        drop(tx);

        // 等待全部任务结束；通道在最后一个发送端释放后关闭
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                error!("检测任务异常终止: {e}");
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use crate::health::result::ResponseSummary;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::time::Duration;

    /// 按URL配置延迟的桩检测器，不发起网络请求
    struct StubChecker {
        delays: BTreeMap<String, Duration>,
    }

    impl StubChecker {
        fn new(delays: &[(&str, Duration)]) -> Self {
            Self {
                delays: delays
                    .iter()
                    .map(|(url, delay)| (url.to_string(), *delay))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl HealthChecker for StubChecker {
        async fn check(&self, url: &str) -> CheckResult {
            let delay = self.delays.get(url).copied().unwrap_or_default();
            tokio::time::sleep(delay).await;
            CheckResult::new(url)
                .with_duration(delay)
                .with_response(ResponseSummary::new(200))
        }
    }

    /// 总是失败的桩检测器
    struct FailingChecker;

    #[async_trait]
    impl HealthChecker for FailingChecker {
        async fn check(&self, url: &str) -> CheckResult {
            CheckResult::new(url)
                .with_duration(Duration::from_millis(1))
                .with_error(CheckError::Transport("connection failed".to_string()))
        }
    }

    #[tokio::test]
    async fn test_yields_one_result_per_url_then_closes() {
        let urls: Vec<String> = (0..5).map(|i| format!("http://svc-{i}.test/")).collect();
        let checker = Arc::new(StubChecker::new(&[]));

        let mut rx = healthcheck(checker, urls.clone());

        let mut seen = Vec::new();
        while let Some(result) = rx.recv().await {
            seen.push(result.url);
        }

        assert_eq!(seen.len(), urls.len());
        let mut expected = urls;
        seen.sort();
        expected.sort();
        assert_eq!(seen, expected);

        // 通道已关闭，继续接收立即返回None
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_task_does_not_delay_fast_results() {
        let slow = "http://slow.test/";
        let fast_a = "http://fast-a.test/";
        let fast_b = "http://fast-b.test/";
        let checker = Arc::new(StubChecker::new(&[
            (slow, Duration::from_secs(5)),
            (fast_a, Duration::from_millis(10)),
            (fast_b, Duration::from_millis(20)),
        ]));

        let mut rx = healthcheck(
            checker,
            vec![slow.to_string(), fast_a.to_string(), fast_b.to_string()],
        );

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.url, fast_a);
        assert_eq!(second.url, fast_b);

        let last = rx.recv().await.unwrap();
        assert_eq!(last.url, slow);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_failures_do_not_abort_batch() {
        let urls: Vec<String> = (0..3).map(|i| format!("http://down-{i}.test/")).collect();

        let mut rx = healthcheck(Arc::new(FailingChecker), urls.clone());

        let mut count = 0;
        while let Some(result) = rx.recv().await {
            assert!(!result.success());
            assert!(result.error.is_some());
            count += 1;
        }
        assert_eq!(count, urls.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_receiver_without_blocking() {
        let url = "http://slow.test/";
        let checker = Arc::new(StubChecker::new(&[(url, Duration::from_secs(30))]));

        // 调用立即返回，即使任务要运行很久
        let mut rx = healthcheck(checker, vec![url.to_string()]);

        let result = rx.recv().await.unwrap();
        assert_eq!(result.url, url);
    }
}
