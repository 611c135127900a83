// 集成测试公共模块
//
// 提供可编程的桩提供方和测试配置

#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dolmetscher::translation::{
    TranslationConfig, TranslationError, TranslationProvider, TranslationResult,
    TranslationService,
};

/// 可编程的桩翻译提供方
///
/// - 命中映射表的文本返回映射的译文，未命中的返回 `T:<原文>`
/// - `fail_first` 让前N次调用失败（之后恢复正常）
/// - `fail_always` 让所有调用失败
/// - `random_delay` 注入由文本哈希导出的伪随机延迟，用于检验
///   结果顺序与完成顺序无关
pub struct StubProvider {
    mapping: HashMap<String, String>,
    fail_first: usize,
    fail_always: bool,
    random_delay: bool,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            mapping: HashMap::new(),
            fail_first: 0,
            fail_always: false,
            random_delay: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// 带映射表的桩
    pub fn with_mapping(pairs: &[(&str, &str)]) -> Self {
        let mut stub = Self::new();
        stub.mapping = pairs
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        stub
    }

    /// 所有调用都失败的桩
    pub fn failing() -> Self {
        let mut stub = Self::new();
        stub.fail_always = true;
        stub
    }

    /// 前 `fail_first` 次调用失败、之后成功的桩
    pub fn flaky(fail_first: usize, pairs: &[(&str, &str)]) -> Self {
        let mut stub = Self::with_mapping(pairs);
        stub.fail_first = fail_first;
        stub
    }

    /// 启用伪随机延迟
    pub fn with_random_delay(mut self) -> Self {
        self.random_delay = true;
        self
    }

    /// 已发生的提供方调用次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TranslationProvider for StubProvider {
    async fn translate(&self, text: &str, _target_lang: &str) -> TranslationResult<String> {
        let call_index = self.calls.fetch_add(1, Ordering::SeqCst);

        if self.random_delay {
            let mut hasher = DefaultHasher::new();
            text.hash(&mut hasher);
            let delay_ms = hasher.finish() % 40;
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        if self.fail_always || call_index < self.fail_first {
            return Err(TranslationError::NetworkError(
                "injected failure".to_string(),
            ));
        }

        Ok(self
            .mapping
            .get(text)
            .cloned()
            .unwrap_or_else(|| format!("T:{}", text)))
    }
}

/// 测试配置：重试间隔压缩到毫秒级，其余保持默认
pub fn test_config() -> TranslationConfig {
    TranslationConfig {
        retry_delay_ms: 5,
        max_concurrent_requests: 4,
        ..Default::default()
    }
}

/// 用桩提供方构建服务，同时保留对桩的引用以便断言调用次数
pub fn service_with(
    provider: StubProvider,
    config: TranslationConfig,
) -> (Arc<StubProvider>, TranslationService<StubProvider>) {
    let provider = Arc::new(provider);
    let service = TranslationService::new(Arc::clone(&provider), config);
    (provider, service)
}
