use crate::auth::{TokenCache, TokenProvider};
use crate::config::AppConfig;
use crate::mock::MockReportSource;
use crate::source::ReportSource;
use crate::upstream::DocumentClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub source: Arc<dyn ReportSource>,
    pub tokens: Arc<dyn TokenProvider>,
    pub documents: Arc<DocumentClient>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        source: Arc<dyn ReportSource>,
        tokens: Arc<dyn TokenProvider>,
        documents: DocumentClient,
    ) -> Self {
        Self {
            config: Arc::new(config),
            source,
            tokens,
            documents: Arc::new(documents),
        }
    }

    /// Mock report data plus a real token cache and document client built
    /// from `config`.
    pub fn from_config(config: AppConfig) -> Self {
        let client = reqwest::Client::new();
        let tokens = TokenCache::new(client.clone(), &config.upstream);
        let documents = DocumentClient::new(client, &config.upstream);
        Self::new(
            config,
            Arc::new(MockReportSource::new()),
            Arc::new(tokens),
            documents,
        )
    }
}
