//! Finchat - 个人理财摘要服务
//!
//! 接收用户的收入和支出档案，计算储蓄摘要，并可选地调用外部文本生成
//! API 对摘要进行润色；客户端在服务不可用时本地重算兜底。

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod inference;
pub mod models;
pub mod observability;
pub mod services;
