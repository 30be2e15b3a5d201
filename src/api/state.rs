// src/api/state.rs
use crate::config::AppConfig;
use crate::providers::gemini::GeminiProvider;
use crate::runner::Evaluator;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: Client,
    /// `None` when no Gemini API key was configured at startup.
    pub evaluator: Option<Arc<Evaluator<GeminiProvider>>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let client = Client::new();

        let evaluator = match &config.gemini {
            Some(gemini) => {
                log::info!("✅ Evaluator ready with model {}", gemini.model);
                let provider = GeminiProvider::new(client.clone(), gemini.clone());
                Some(Arc::new(Evaluator::new(
                    provider,
                    gemini.model.clone(),
                    gemini.timeout,
                )))
            }
            None => {
                log::warn!("⚠️  GEMINI_API_KEY not set - every evaluation request will fail");
                None
            }
        };

        Self {
            config: Arc::new(config),
            client,
            evaluator,
        }
    }
}
