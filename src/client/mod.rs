//! 客户端模块
//!
//! 调用摘要服务并在任何失败时本地重算兜底，用户永远能得到一个答案。

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::dto::chat_dto::{ChatRequest, ChatResponse};
use crate::models::SavingsBreakdown;

/// 客户端默认超时（秒），单次尝试，从不重试
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 本地兜底摘要
///
/// 与服务端共用同一份储蓄算术，但模板有意不同：不含职业从句，
/// 也从不调用外部生成器。
pub fn local_summary(income_monthly: f64, expenses: &BTreeMap<String, f64>) -> String {
    let breakdown = SavingsBreakdown::compute(income_monthly, expenses);
    format!(
        "Your total monthly expenses are ₹{:.2}. You can save ₹{:.2} per month.",
        breakdown.total_expenses, breakdown.savings
    )
}

/// 展示给用户的最终结果
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    /// 摘要文本
    pub summary: String,
    /// 支出明细
    pub details: BTreeMap<String, f64>,
    /// 是否走了本地兜底（服务不可达时为 true）
    pub fallback_used: bool,
}

/// 摘要服务客户端
pub struct ChatClient {
    client: reqwest::Client,
    api_url: String,
}

impl ChatClient {
    /// 创建客户端，使用默认超时
    pub fn new(api_url: &str) -> Result<Self, reqwest::Error> {
        Self::with_timeout(api_url, DEFAULT_TIMEOUT_SECS)
    }

    /// 创建客户端，指定超时（秒）
    pub fn with_timeout(api_url: &str, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    /// 请求摘要
    ///
    /// 任何传输失败（拒绝连接、超时、非 2xx、响应不可解析）都回落到
    /// 本地兜底；服务端返回空摘要时同样以本地文本替代。
    pub async fn request_summary(&self, request: &ChatRequest) -> SummaryView {
        match self.fetch(request).await {
            Ok(response) => {
                debug!("Summary received from backend");

                let summary = if response.summary.is_empty() {
                    local_summary(request.income_monthly, &request.expenses)
                } else {
                    response.summary
                };
                let details = if response.details.is_empty() {
                    request.expenses.clone()
                } else {
                    response.details
                };

                SummaryView {
                    summary,
                    details,
                    fallback_used: false,
                }
            }
            Err(e) => {
                warn!(error = %e, "Backend unavailable, showing local summary instead");

                SummaryView {
                    summary: local_summary(request.income_monthly, &request.expenses),
                    details: request.expenses.clone(),
                    fallback_used: true,
                }
            }
        }
    }

    /// 单次请求，非 2xx 视为失败
    async fn fetch(&self, request: &ChatRequest) -> Result<ChatResponse, reqwest::Error> {
        let response = self
            .client
            .post(&self.api_url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}
