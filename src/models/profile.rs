//! 理财档案数据模型
//!
//! 描述用户的收入、支出和摘要生成来源，以及两端共享的储蓄计算。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 理财档案
///
/// 每次请求构造一份，响应后即丢弃，不做任何持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// 用户 ID（仅用于请求日志）
    #[serde(default)]
    pub user_id: String,

    /// 职业
    pub occupation: String,

    /// 年龄
    pub age: u32,

    /// 月收入
    pub income_monthly: f64,

    /// 按类别划分的月支出（可以为空，总额记 0）
    ///
    /// BTreeMap 保证遍历顺序稳定，相同请求产生逐字节一致的摘要。
    pub expenses: BTreeMap<String, f64>,

    /// 摘要生成来源
    pub prompt_source: PromptSource,
}

/// 摘要生成来源标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptSource {
    /// HuggingFace 推理 API
    Hf,
    /// IBM Granite（预留，当前无生成器接入）
    Ibm,
}

/// 储蓄计算结果
///
/// 服务端摘要和客户端兜底共用同一份算术，只有呈现模板不同。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsBreakdown {
    /// 支出总额
    pub total_expenses: f64,
    /// 可储蓄金额（可以为负，不视为错误）
    pub savings: f64,
}

impl SavingsBreakdown {
    /// 计算支出总额与可储蓄金额
    pub fn compute(income_monthly: f64, expenses: &BTreeMap<String, f64>) -> Self {
        let total_expenses: f64 = expenses.values().sum();
        Self {
            total_expenses,
            savings: income_monthly - total_expenses,
        }
    }
}

/// 摘要结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    /// 生成的自然语言摘要
    pub summary: String,
    /// 支出明细（原样回显输入的支出）
    pub details: BTreeMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_expenses() -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("rent".to_string(), 4000.0),
            ("food".to_string(), 2000.0),
            ("transport".to_string(), 500.0),
        ])
    }

    #[test]
    fn test_breakdown_sums_all_categories() {
        let breakdown = SavingsBreakdown::compute(15000.0, &demo_expenses());
        assert_eq!(breakdown.total_expenses, 6500.0);
        assert_eq!(breakdown.savings, 8500.0);
    }

    #[test]
    fn test_breakdown_empty_expenses() {
        let breakdown = SavingsBreakdown::compute(15000.0, &BTreeMap::new());
        assert_eq!(breakdown.total_expenses, 0.0);
        assert_eq!(breakdown.savings, 15000.0);
    }

    #[test]
    fn test_breakdown_allows_negative_savings() {
        let expenses = BTreeMap::from([("rent".to_string(), 9000.0)]);
        let breakdown = SavingsBreakdown::compute(5000.0, &expenses);
        assert_eq!(breakdown.savings, -4000.0);
    }

    #[test]
    fn test_prompt_source_wire_format() {
        assert_eq!(
            serde_json::from_str::<PromptSource>("\"hf\"").unwrap(),
            PromptSource::Hf
        );
        assert_eq!(
            serde_json::from_str::<PromptSource>("\"ibm\"").unwrap(),
            PromptSource::Ibm
        );
        assert!(serde_json::from_str::<PromptSource>("\"gemini\"").is_err());
    }
}
