use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::{Client, StatusCode};
use super::credentials::CredentialSet;
use super::errors::SearchError;
use super::models::{SearchPage, SearchResponse, TweetItem};

const TWEET_FIELDS: &str = "id,text,created_at";

#[async_trait]
pub trait TweetSearch: Send + Sync {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        next_token: Option<&str>,
    ) -> Result<Vec<TweetItem>, SearchError>;
}

/// Recent-search client that rotates bearer tokens when rate limited.
#[derive(Clone)]
pub struct TwitterClient {
    client: Client,
    credentials: Arc<CredentialSet>,
    search_url: String,
    language: String,
}

impl TwitterClient {
    pub fn new(credentials: Arc<CredentialSet>, search_url: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            credentials,
            search_url: search_url.into(),
            language: language.into(),
        }
    }

    fn build_query(&self, query: &str) -> String {
        format!("{} -is:retweet -has:links -has:media lang:{}", query, self.language)
    }

    /// Fetches one page of results, trying each credential at most once.
    pub async fn search_page(
        &self,
        query: &str,
        max_results: u32,
        next_token: Option<&str>,
    ) -> Result<SearchPage, SearchError> {
        let full_query = self.build_query(query);
        let max_results = max_results.to_string();
        let mut attempts = 0;

        while attempts < self.credentials.len() {
            let (key_index, token) = self.credentials.current();

            let mut params = vec![
                ("query", full_query.as_str()),
                ("max_results", max_results.as_str()),
                ("tweet.fields", TWEET_FIELDS),
            ];
            if let Some(next_token) = next_token {
                params.push(("next_token", next_token));
            }

            debug!("Searching {:?} with API key {}", full_query, key_index + 1);

            let response = self.client
                .get(&self.search_url)
                .bearer_auth(token)
                .query(&params)
                .send()
                .await?;

            let status = response.status();
            debug!("Search API responded with status {}", status);

            match status {
                StatusCode::OK => {
                    let body: SearchResponse = response.json().await?;
                    let page = SearchPage::from(body);
                    info!("Fetched {} tweets for {}", page.tweets.len(), query);
                    return Ok(page);
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    warn!("API key {} exceeded rate limit. Switching...", key_index + 1);
                    self.credentials.rotate();
                    attempts += 1;
                }
                _ => {
                    let text = response.text().await?;
                    let body = serde_json::from_str(&text)
                        .unwrap_or(serde_json::Value::String(text));
                    error!("Error fetching tweets: {} {}", status, body);
                    return Err(SearchError::Upstream { status: status.as_u16(), body });
                }
            }
        }

        error!("All {} API keys are rate limited", attempts);
        Err(SearchError::ExhaustedCredentials { attempts })
    }
}

#[async_trait]
impl TweetSearch for TwitterClient {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        next_token: Option<&str>,
    ) -> Result<Vec<TweetItem>, SearchError> {
        self.search_page(query, max_results, next_token)
            .await
            .map(|page| page.tweets)
    }
}
