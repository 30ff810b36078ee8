use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{SuggestionService, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub suggestions: Arc<dyn SuggestionService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        suggestions: Arc<dyn SuggestionService>,
    ) -> Self {
        Self {
            config,
            version_control,
            suggestions,
        }
    }
}
