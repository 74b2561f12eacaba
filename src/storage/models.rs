use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::twitter::TweetItem;

/// One cached search result set, keyed by the normalized `#hashtag` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetDocument {
    pub hashtag: String,
    pub tweets: Vec<TweetItem>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl TweetDocument {
    pub fn new(hashtag: String, tweets: Vec<TweetItem>) -> Self {
        Self {
            hashtag,
            tweets,
            created_at: Utc::now(),
        }
    }
}
