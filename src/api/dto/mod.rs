//! DTO 模块
//!
//! 定义 API 的请求和响应序列化类型。

pub mod chat_dto;
