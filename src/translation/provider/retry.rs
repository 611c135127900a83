//! 重试组合子
//!
//! 将重试策略实现为显式的包装函数，而不是隐式的宽泛异常捕获，
//! 使失败处理作为（尝试结果）→（最终结果）的纯函数可见、可测试

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::translation::error::{TranslationError, TranslationResult};

/// 以固定间隔重试异步操作
///
/// 最多执行 `max_attempts` 次（含首次），两次尝试之间等待固定的
/// `delay`（不加抖动）。任何错误都会触发重试——本层不区分错误种类，
/// 瞬时错误与永久错误同等对待。每次失败都会写一条结构化日志。
///
/// 所有尝试耗尽后返回最后一次的错误
pub async fn with_retry<T, F, Fut>(
    max_attempts: usize,
    delay: Duration,
    mut operation: F,
) -> TranslationResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = TranslationResult<T>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    "翻译请求失败"
                );
                last_error = Some(e);

                if attempt < max_attempts {
                    sleep(delay).await;
                }
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| TranslationError::InternalError("重试次数配置为0".to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_returns_first_success_without_retrying() {
        let calls = AtomicUsize::new(0);

        let result = with_retry(3, Duration::from_millis(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, TranslationError>(42) }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let calls = AtomicUsize::new(0);

        let result = with_retry(3, Duration::from_millis(1), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(TranslationError::NetworkError("transient".to_string()))
                } else {
                    Ok("done".to_string())
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhausts_attempts_and_returns_last_error() {
        let calls = AtomicUsize::new(0);

        let result: TranslationResult<String> = with_retry(3, Duration::from_millis(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(TranslationError::TimeoutError("slow".to_string())) }
        })
        .await;

        assert!(matches!(result, Err(TranslationError::TimeoutError(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_errors_are_retried_all_the_same() {
        // 本层不做错误种类区分：凭证错误也会重试满次数
        let calls = AtomicUsize::new(0);

        let result: TranslationResult<String> = with_retry(3, Duration::from_millis(1), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(TranslationError::ConfigError("bad credential".to_string())) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
