pub mod cache;
pub mod config;
pub mod logging;
pub mod sentiment;
pub mod storage;
pub mod twitter;
pub mod web;

use std::sync::Arc;
use log::info;
use crate::cache::TweetCache;
use crate::config::Config;
use crate::sentiment::{SentimentAnalyzer, VaderScorer};
use crate::storage::SqliteTweetStore;
use crate::twitter::{CredentialSet, TwitterClient};
use crate::web::{AppState, WebServer};

pub use crate::logging::LogLevel;

/// Builds the store, search client and analyzer from `config`.
pub async fn init(config: &Config) -> Result<AppState, Box<dyn std::error::Error + Send + Sync>> {
    config.validate()?;

    let store = SqliteTweetStore::new(&config.database_path)?;

    let credentials = Arc::new(CredentialSet::new(config.bearer_tokens.clone())?);
    info!("Loaded {} search API keys", credentials.len());

    let search = TwitterClient::new(credentials, config.search_url.clone(), config.language.clone());

    let cache = TweetCache::new(Arc::new(store), Arc::new(search), config.max_results);
    let analyzer = SentimentAnalyzer::new(Arc::new(VaderScorer::new()));

    Ok(AppState {
        cache: Arc::new(cache),
        analyzer: Arc::new(analyzer),
    })
}

/// Serves requests until Ctrl+C.
pub async fn run(state: AppState, config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let server = WebServer::new(state, config.web_address(), config.static_dir.clone());

    server.run(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down.");
        }
    }).await
}
