use std::sync::Arc;

use crate::classifier::PracticeClassifier;
use crate::config::ScanConfig;

/// Shared application state accessible to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: PracticeClassifier<'static>,
    pub config: Arc<ScanConfig>,
}

impl AppState {
    pub fn new(classifier: PracticeClassifier<'static>, config: ScanConfig) -> Self {
        Self {
            classifier,
            config: Arc::new(config),
        }
    }
}
