//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用程序错误类型
///
/// 输入校验失败是该服务唯一向客户端暴露的错误；外部生成失败在
/// 摘要服务内部降级为失败标注，不会出现在这里。
#[derive(Error, Debug)]
pub enum AppError {
    /// 参数验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),
}

/// Axum response implementation for AppError
///
/// 每个错误响应都带一个新生成的请求 ID，同一 ID 同时写入日志。
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();
        let (status, code) = (&self).into();
        tracing::warn!(%request_id, code = %code, error = %self, "Request rejected");

        let body = Json(ErrorResponse::new(&code, &self.to_string()).with_request_id(&request_id));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
    /// 请求 ID
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            request_id: None,
        }
    }

    /// 添加请求 ID
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::Validation(_) => (400, "BAD_REQUEST".to_string()),
        }
    }
}
