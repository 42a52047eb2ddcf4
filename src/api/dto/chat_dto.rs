//! 摘要 DTO
//!
//! 用于 /chat API 的请求和响应序列化

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{FinancialProfile, PromptSource, SummaryResult};

/// 摘要请求
///
/// 金额不做上下界校验：负数或离谱的数值照常接受，只有无法解析为
/// 数值的输入会被拒绝。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// 用户 ID
    #[serde(default)]
    pub user_id: String,

    /// 职业
    pub occupation: String,

    /// 年龄
    pub age: u32,

    /// 月收入
    pub income_monthly: f64,

    /// 按类别划分的月支出（必填，可以为空映射）
    pub expenses: BTreeMap<String, f64>,

    /// 摘要生成来源
    pub prompt_source: PromptSource,
}

impl From<ChatRequest> for FinancialProfile {
    fn from(request: ChatRequest) -> Self {
        Self {
            user_id: request.user_id,
            occupation: request.occupation,
            age: request.age,
            income_monthly: request.income_monthly,
            expenses: request.expenses,
            prompt_source: request.prompt_source,
        }
    }
}

/// 摘要响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// 生成的摘要
    pub summary: String,

    /// 支出明细（原样回显请求中的支出）
    pub details: BTreeMap<String, f64>,
}

impl From<SummaryResult> for ChatResponse {
    fn from(result: SummaryResult) -> Self {
        Self {
            summary: result.summary,
            details: result.details,
        }
    }
}

/// 存活检查响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    /// 服务状态消息
    pub message: String,
}
