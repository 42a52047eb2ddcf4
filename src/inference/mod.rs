//! 外部文本生成模块
//!
//! 封装对 HuggingFace 推理 API 的调用。失败按类型区分，调用方据此
//! 决定如何降级，外部调用失败绝不向上传播为服务错误。

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::config::InferenceConfig;

/// 外部生成调用的失败类型
#[derive(thiserror::Error, Debug)]
pub enum InferenceError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// 文本生成器 trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 将提示词发给外部端点，返回生成文本
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError>;

    /// 生成器名称（用于日志和失败标注）
    fn name(&self) -> &str;
}

/// HuggingFace 推理 API 客户端
pub struct HuggingFaceTextGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HuggingFaceTextGenerator {
    pub fn new(endpoint: &str, api_key: &str, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// 解析推理响应
    ///
    /// 两种返回形态：对象列表取第一个元素的 `generated_text` 字段；
    /// 其他形态整体转成字符串。
    fn extract_generated_text(body: Value) -> Result<String, InferenceError> {
        match body {
            Value::Array(items) => items
                .first()
                .and_then(|item| item.get("generated_text"))
                .and_then(|text| text.as_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    InferenceError::Parse("missing generated_text in response array".to_string())
                }),
            other => Ok(other.to_string()),
        }
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::Timeout
                } else {
                    InferenceError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::Status(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                InferenceError::Timeout
            } else {
                InferenceError::Parse(e.to_string())
            }
        })?;

        Self::extract_generated_text(body)
    }

    fn name(&self) -> &str {
        "HuggingFace"
    }
}

/// 按配置创建文本生成器
///
/// 凭证缺失时返回 None，外部生成分支整体禁用。
pub fn create_text_generator(
    config: &InferenceConfig,
) -> Result<Option<Arc<dyn TextGenerator>>, reqwest::Error> {
    let Some(api_key) = config.huggingface_api_key.as_deref().filter(|k| !k.is_empty()) else {
        return Ok(None);
    };

    let generator = HuggingFaceTextGenerator::new(&config.endpoint, api_key, config.timeout)?;
    Ok(Some(Arc::new(generator)))
}
