use std::sync::Arc;
use log::{debug, info};
use thiserror::Error;
use crate::storage::{StorageError, TweetDocument, TweetStore};
use crate::twitter::{SearchError, TweetItem, TweetSearch};

#[derive(Error, Debug)]
pub enum CacheError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSource {
    Cache,
    Upstream,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheLookup {
    pub tweets: Vec<TweetItem>,
    pub source: CacheSource,
}

/// Turns user input into the search query and cache key: `#` + trimmed text.
pub fn hashtag_query(hashtag: &str) -> Option<String> {
    let hashtag = hashtag.trim();
    if hashtag.is_empty() {
        None
    } else {
        Some(format!("#{}", hashtag))
    }
}

/// Store-first lookup. Entries never expire and only non-empty results are kept.
pub struct TweetCache {
    store: Arc<dyn TweetStore>,
    search: Arc<dyn TweetSearch>,
    max_results: u32,
}

impl TweetCache {
    pub fn new(store: Arc<dyn TweetStore>, search: Arc<dyn TweetSearch>, max_results: u32) -> Self {
        Self { store, search, max_results }
    }

    pub async fn get_or_fetch(&self, query: &str) -> Result<CacheLookup, CacheError> {
        if let Some(document) = self.store.find_one(query).await? {
            info!("Cache hit for {} ({} tweets)", query, document.tweets.len());
            return Ok(CacheLookup {
                tweets: document.tweets,
                source: CacheSource::Cache,
            });
        }

        info!("Cache miss for {}, fetching from search API", query);
        let tweets = self.search.search(query, self.max_results, None).await?;

        if tweets.is_empty() {
            debug!("No tweets for {}, not caching", query);
        } else {
            self.store
                .insert_one(&TweetDocument::new(query.to_string(), tweets.clone()))
                .await?;
        }

        Ok(CacheLookup {
            tweets,
            source: CacheSource::Upstream,
        })
    }
}
