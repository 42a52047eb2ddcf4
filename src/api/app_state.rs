use crate::observability::AppMetrics;
use crate::services::summary::SummaryService;
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Summary service for savings computation and text generation
    pub summary_service: Arc<dyn SummaryService>,
    /// Shared application metrics
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("summary_service", &"Arc<dyn SummaryService>")
            .field("metrics", &"Arc<AppMetrics>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(summary_service: Box<dyn SummaryService>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            summary_service: Arc::from(summary_service),
            metrics,
        }
    }
}
