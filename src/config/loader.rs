use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. ./config.toml
    /// 2. 环境变量
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("FINCHAT_").split("__"));

        let config = figment.extract()?;
        Ok(Self::apply_credential_env(config))
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("FINCHAT_").split("__"));

        let config = figment.extract()?;
        Ok(Self::apply_credential_env(config))
    }

    /// 读取进程环境中的裸凭证变量
    ///
    /// 凭证缺失不是错误，只会禁用外部生成分支。
    fn apply_credential_env(mut config: AppConfig) -> AppConfig {
        if config.inference.huggingface_api_key.is_none() {
            config.inference.huggingface_api_key = std::env::var("HUGGINGFACE_API_KEY").ok();
        }
        if config.inference.granite_api_key.is_none() {
            config.inference.granite_api_key = std::env::var("IBM_GRANITE_API_KEY").ok();
        }
        config
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.inference.endpoint.is_empty() {
            return Err(ConfigValidationError::MissingInferenceEndpoint);
        }

        if config.inference.timeout == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("文本生成端点未配置")]
    MissingInferenceEndpoint,

    #[error("文本生成超时无效，必须大于 0")]
    InvalidTimeout,
}
