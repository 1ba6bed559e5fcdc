use std::sync::Arc;

use crate::{
    config::Config,
    observer::{QueryObserver, TracingObserver},
    services::{
        catalog::{CatalogProvider, TmdbProvider},
        generation::{OpenAiClient, TextGenerator},
    },
};

/// Shared application state: the two external-service clients behind their
/// trait seams. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogProvider>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { catalog, generator }
    }

    /// Builds the production providers from configuration.
    pub fn from_config(config: &Config) -> Self {
        let observer: Arc<dyn QueryObserver> = Arc::new(TracingObserver);
        let catalog = TmdbProvider::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            observer,
        );
        let generator = OpenAiClient::new(
            config.openai_api_key.clone(),
            config.openai_api_url.clone(),
        );

        Self::new(Arc::new(catalog), Arc::new(generator))
    }
}
