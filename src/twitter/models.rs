use serde::{Deserialize, Serialize};

/// The unit of text that gets scored. Stored and returned as `{"text": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetItem {
    pub text: String,
}

impl TweetItem {
    /// Trims `text` and returns `None` when nothing is left.
    pub fn from_raw(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(TweetItem { text: text.to_string() })
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub tweets: Vec<TweetItem>,
    pub next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub data: Vec<RawTweet>,
    #[serde(default)]
    pub meta: Option<SearchMeta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTweet {
    #[allow(dead_code)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[allow(dead_code)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchMeta {
    pub next_token: Option<String>,
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        SearchPage {
            tweets: response.data
                .iter()
                .filter_map(|tweet| TweetItem::from_raw(&tweet.text))
                .collect(),
            next_token: response.meta.and_then(|meta| meta.next_token),
        }
    }
}
