//! 摘要服务
//!
//! 根据理财档案计算储蓄摘要，并按来源标签选择性调用外部文本生成。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::inference::TextGenerator;
use crate::models::{FinancialProfile, PromptSource, SavingsBreakdown, SummaryResult};
use crate::observability::AppMetrics;

/// 摘要服务 trait
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// 计算储蓄摘要
    ///
    /// 永远返回结果：外部生成失败只会在模板句后追加失败标注。
    async fn compute_summary(&self, profile: &FinancialProfile) -> SummaryResult;
}

/// 摘要服务实现
pub struct SummaryServiceImpl {
    /// 外部文本生成器，凭证缺失时为 None
    generator: Option<Arc<dyn TextGenerator>>,
    metrics: Arc<AppMetrics>,
}

impl SummaryServiceImpl {
    /// 创建新的服务实例
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, metrics: Arc<AppMetrics>) -> Self {
        Self { generator, metrics }
    }

    /// 固定模板句
    fn template_sentence(occupation: &str, breakdown: &SavingsBreakdown) -> String {
        format!(
            "Hello! As a {}, your total monthly expenses are ₹{:.2}, and you can save ₹{:.2} per month.",
            occupation, breakdown.total_expenses, breakdown.savings
        )
    }
}

#[async_trait]
impl SummaryService for SummaryServiceImpl {
    async fn compute_summary(&self, profile: &FinancialProfile) -> SummaryResult {
        let breakdown = SavingsBreakdown::compute(profile.income_monthly, &profile.expenses);
        let mut summary = Self::template_sentence(&profile.occupation, &breakdown);

        debug!(
            total_expenses = breakdown.total_expenses,
            savings = breakdown.savings,
            "Computed savings breakdown"
        );

        // 每次调用至多一次外部请求
        if profile.prompt_source == PromptSource::Hf {
            if let Some(generator) = &self.generator {
                match generator.generate(&summary).await {
                    Ok(generated) => summary = generated,
                    Err(e) => {
                        warn!(error = %e, "Text generation failed, keeping template summary");
                        self.metrics.record_inference_failure();
                        summary.push_str(&format!(" ({} fetch failed: {})", generator.name(), e));
                    }
                }
            }
        }

        SummaryResult {
            summary,
            details: profile.expenses.clone(),
        }
    }
}

/// 创建摘要服务
pub fn create_summary_service(
    generator: Option<Arc<dyn TextGenerator>>,
    metrics: Arc<AppMetrics>,
) -> Box<dyn SummaryService> {
    Box::new(SummaryServiceImpl::new(generator, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{InferenceError, MockTextGenerator};
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn demo_profile(prompt_source: PromptSource) -> FinancialProfile {
        FinancialProfile {
            user_id: "demo_user".to_string(),
            occupation: "student".to_string(),
            age: 22,
            income_monthly: 15000.0,
            expenses: BTreeMap::from([
                ("rent".to_string(), 4000.0),
                ("food".to_string(), 2000.0),
                ("transport".to_string(), 500.0),
            ]),
            prompt_source,
        }
    }

    fn service_without_generator() -> SummaryServiceImpl {
        SummaryServiceImpl::new(None, Arc::new(AppMetrics::default()))
    }

    #[tokio::test]
    async fn test_template_sentence_for_demo_scenario() {
        let service = service_without_generator();
        let result = service.compute_summary(&demo_profile(PromptSource::Ibm)).await;

        assert_eq!(
            result.summary,
            "Hello! As a student, your total monthly expenses are ₹6500.00, and you can save ₹8500.00 per month."
        );
        assert_eq!(result.details, demo_profile(PromptSource::Ibm).expenses);
    }

    #[rstest]
    #[case(15000.0, BTreeMap::new(), 0.0, 15000.0)]
    #[case(0.0, BTreeMap::from([("rent".to_string(), 100.0)]), 100.0, -100.0)]
    #[case(500.0, BTreeMap::from([("a".to_string(), 50.5), ("b".to_string(), 49.5)]), 100.0, 400.0)]
    #[tokio::test]
    async fn test_arithmetic_matches_breakdown(
        #[case] income: f64,
        #[case] expenses: BTreeMap<String, f64>,
        #[case] expected_total: f64,
        #[case] expected_savings: f64,
    ) {
        let service = service_without_generator();
        let profile = FinancialProfile {
            income_monthly: income,
            expenses: expenses.clone(),
            ..demo_profile(PromptSource::Ibm)
        };

        let result = service.compute_summary(&profile).await;
        assert!(result
            .summary
            .contains(&format!("₹{:.2}", expected_total)));
        assert!(result
            .summary
            .contains(&format!("save ₹{:.2}", expected_savings)));
        assert_eq!(result.details, expenses);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let service = service_without_generator();
        let profile = demo_profile(PromptSource::Ibm);

        let first = service.compute_summary(&profile).await;
        let second = service.compute_summary(&profile).await;
        assert_eq!(first.summary, second.summary);
    }

    #[tokio::test]
    async fn test_generator_not_called_for_ibm_source() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().times(0);
        generator.expect_name().times(0);

        let service = SummaryServiceImpl::new(
            Some(Arc::new(generator)),
            Arc::new(AppMetrics::default()),
        );
        let result = service.compute_summary(&demo_profile(PromptSource::Ibm)).await;
        assert!(result.summary.starts_with("Hello! As a student"));
    }

    #[tokio::test]
    async fn test_generated_text_replaces_summary() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Ok("A rephrased financial outlook.".to_string()));

        let service = SummaryServiceImpl::new(
            Some(Arc::new(generator)),
            Arc::new(AppMetrics::default()),
        );
        let result = service.compute_summary(&demo_profile(PromptSource::Hf)).await;
        assert_eq!(result.summary, "A rephrased financial outlook.");
    }

    #[tokio::test]
    async fn test_failed_generation_appends_annotation() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Err(InferenceError::Status(500)));
        generator.expect_name().return_const("HuggingFace".to_string());

        let metrics = Arc::new(AppMetrics::default());
        let service = SummaryServiceImpl::new(Some(Arc::new(generator)), metrics.clone());

        let result = service.compute_summary(&demo_profile(PromptSource::Hf)).await;
        assert_eq!(
            result.summary,
            "Hello! As a student, your total monthly expenses are ₹6500.00, and you can save ₹8500.00 per month. (HuggingFace fetch failed: unexpected status 500)"
        );
        assert_eq!(result.details, demo_profile(PromptSource::Hf).expenses);
        assert_eq!(metrics.inference_failures(), 1);
    }

    #[tokio::test]
    async fn test_timeout_and_parse_failures_are_distinguishable() {
        for (error, needle) in [
            (InferenceError::Timeout, "request timed out"),
            (
                InferenceError::Parse("missing generated_text in response array".to_string()),
                "unexpected response shape",
            ),
        ] {
            let mut generator = MockTextGenerator::new();
            let mut error = Some(error);
            generator
                .expect_generate()
                .times(1)
                .returning(move |_| Err(error.take().expect("generate called once")));
            generator.expect_name().return_const("HuggingFace".to_string());

            let service = SummaryServiceImpl::new(
                Some(Arc::new(generator)),
                Arc::new(AppMetrics::default()),
            );
            let result = service.compute_summary(&demo_profile(PromptSource::Hf)).await;
            assert!(result.summary.contains(needle), "missing {:?}", needle);
        }
    }
}
