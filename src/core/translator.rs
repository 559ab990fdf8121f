// ============================================================================
// LangSync - 翻译服务
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 外部翻译通道封装和批量翻译
// 边界:
//   - ✅ 翻译 provider 接口定义
//   - ✅ Google 翻译 provider 实现
//   - ✅ 批量翻译（保护/还原、标点清理）
//   - ✅ 限流错误识别
//   - ✅ 语言代码映射
//   - ❌ 不应包含重试/退避策略
//   - ❌ 不应包含目录树操作
//   - ❌ 不应包含文件读写
//
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::core::protector::TextProtector;

/// 单条文本短于该长度时跳过翻译（太短无法安全经过保护/翻译往返）
const MIN_TRANSLATABLE_LEN: usize = 2;

/// 翻译失败类型
///
/// 限流与普通失败分开，调用方对限流采用冷却+延迟增长，
/// 对普通失败采用线性退避
#[derive(Debug, Error)]
pub enum TranslationError {
    /// 外部服务限流（HTTP 429 等）
    #[error("translation provider rate limited")]
    RateLimited,
    /// 其他 provider 失败
    #[error("translation provider error: {0}")]
    Provider(String),
}

impl TranslationError {
    /// 按错误消息归类：包含限流特征的归为 RateLimited
    pub fn from_provider_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if Self::is_rate_limit_message(&message) {
            TranslationError::RateLimited
        } else {
            TranslationError::Provider(message)
        }
    }

    fn is_rate_limit_message(message: &str) -> bool {
        message.contains("429") || message.to_lowercase().contains("too many requests")
    }
}

/// 外部翻译能力：一批字符串进，同长度一批译文出
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<String>, TranslationError>;
}

/// Google 翻译 web 端点 provider
pub struct GoogleTranslateProvider {
    client: reqwest::Client,
}

impl GoogleTranslateProvider {
    const ENDPOINT: &'static str = "https://translate.googleapis.com/translate_a/single";

    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn translate_one(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        let response = self
            .client
            .get(Self::ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::from_provider_message(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(TranslationError::from_provider_message(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::Provider(e.to_string()))?;

        // 响应形如 [[["译文","原文",...],...],...]，拼接第一层的全部片段
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| TranslationError::Provider("unexpected response shape".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(part);
            }
        }

        Ok(translated)
    }
}

impl Default for GoogleTranslateProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<String>, TranslationError> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.translate_one(text, source_lang, target_lang).await?);
        }
        Ok(results)
    }
}

/// 翻译服务：固定源/目标语言对的外部翻译通道封装
///
/// 每个值在发往 provider 前经过 TextProtector 保护，译文回来后还原。
/// 源语言等于目标语言时为恒等变换
pub struct TranslationService {
    source_lang: String,
    target_lang: String,
    whitelist: Vec<String>,
    provider: Option<Arc<dyn TranslationProvider>>,
}

impl TranslationService {
    /// 创建翻译服务；语言相同则不持有 provider
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        whitelist: Vec<String>,
        provider: Arc<dyn TranslationProvider>,
    ) -> Self {
        let source_lang = source_lang.into();
        let target_lang = target_lang.into();
        let provider = if source_lang == target_lang {
            None
        } else {
            Some(provider)
        };

        Self {
            source_lang,
            target_lang,
            whitelist,
            provider,
        }
    }

    /// 是否为恒等变换（源语言 == 目标语言）
    pub fn is_identity(&self) -> bool {
        self.provider.is_none()
    }

    /// 单个值是否跳过翻译：非字符串、空白或过短的值原样返回
    fn should_skip(value: &Value) -> bool {
        match value {
            Value::String(s) => {
                let trimmed = s.trim();
                trimmed.is_empty() || s.chars().count() < MIN_TRANSLATABLE_LEN
            }
            _ => true,
        }
    }

    /// 批量翻译
    ///
    /// 返回与输入等长、顺序对应的结果。整批经一次外部调用完成；
    /// 调用后 sleep `delay` 节流（独立于调用方的重试退避）。
    /// 原文末尾没有句号而译文多出句号时去掉（标点漂移清理）
    pub async fn translate_batch(
        &self,
        values: &[Value],
        delay: Duration,
    ) -> Result<Vec<Value>, TranslationError> {
        let Some(provider) = &self.provider else {
            return Ok(values.to_vec());
        };
        if values.is_empty() {
            return Ok(Vec::new());
        }

        // 可翻译条目下标、保护后的文本、标记表、原文末尾句号标志
        let mut outbound = Vec::new();
        let mut slots = Vec::new();
        for (index, value) in values.iter().enumerate() {
            if Self::should_skip(value) {
                continue;
            }
            let text = value.as_str().unwrap_or_default();
            let has_trailing_dot = text.trim_end().ends_with('.');
            let (protected, markers) = TextProtector::protect(text, &self.whitelist);
            outbound.push(protected);
            slots.push((index, markers, has_trailing_dot));
        }

        let mut results: Vec<Value> = values.to_vec();
        if outbound.is_empty() {
            return Ok(results);
        }

        let translated = provider
            .translate_batch(&outbound, &self.source_lang, &self.target_lang)
            .await?;

        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }

        if translated.len() != outbound.len() {
            return Err(TranslationError::Provider(format!(
                "batch length mismatch: sent {}, received {}",
                outbound.len(),
                translated.len()
            )));
        }

        for ((index, markers, has_trailing_dot), translated_text) in
            slots.into_iter().zip(translated)
        {
            let mut restored = TextProtector::restore(&translated_text, &markers);
            if !has_trailing_dot && restored.ends_with('.') {
                restored = restored.trim_end_matches('.').to_string();
            }
            results[index] = Value::String(restored);
        }

        Ok(results)
    }
}

/// locale 到翻译引擎语言代码的映射
///
/// 引擎对少数语言使用非标准代码：中文区分简繁、挪威书面语用 no、
/// 希伯来语沿用旧代码 iw
pub fn translator_code(locale: &str) -> String {
    let lang = locale.split('-').next().unwrap_or(locale);
    match lang {
        "zh" => {
            if locale.contains("TW") {
                "zh-TW".to_string()
            } else {
                "zh-CN".to_string()
            }
        }
        "nb" => "no".to_string(),
        "he" => "iw".to_string(),
        _ => lang.to_string(),
    }
}
