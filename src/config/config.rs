use serde::{Deserialize, Serialize};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
        }
    }
}

/// 外部文本生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// 文本生成端点
    pub endpoint: String,
    /// HuggingFace API 密钥（缺失时禁用外部生成分支）
    pub huggingface_api_key: Option<String>,
    /// IBM Granite API 密钥（预留，当前无生成器接入）
    pub granite_api_key: Option<String>,
    /// 请求超时（秒）
    pub timeout: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co/models/gpt2".into(),
            huggingface_api_key: None,
            granite_api_key: None,
            timeout: 10,
        }
    }
}

impl InferenceConfig {
    /// 外部生成分支是否可用
    pub fn enabled(&self) -> bool {
        self.huggingface_api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            structured: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 外部文本生成配置
    pub inference: InferenceConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            inference: InferenceConfig::default(),
            logging: LoggingConfig::default(),
            app_name: "finchat".into(),
        }
    }
}

