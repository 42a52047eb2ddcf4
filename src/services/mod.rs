//! 服务模块

pub mod summary;

pub use summary::{SummaryService, create_summary_service};
