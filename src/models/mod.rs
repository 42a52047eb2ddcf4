//! 数据模型模块

pub mod profile;

pub use profile::{FinancialProfile, PromptSource, SavingsBreakdown, SummaryResult};
