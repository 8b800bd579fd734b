use std::sync::Arc;

use crate::{
    config::Config,
    services::{ContentService, GeminiModelService, TextGenerationModel},
};

#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<ContentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model = Arc::new(GeminiModelService::new(&config));
        Self::with_model(config, model)
    }

    /// Builds the state around a substitute model implementation. Used by
    /// tests to exercise the pipeline without contacting the provider.
    pub fn with_model(config: Config, model: Arc<dyn TextGenerationModel>) -> Self {
        let content_service = Arc::new(ContentService::new(model));

        Self {
            content_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_construction() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.web_server_port, 8080);
    }
}
