use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SearchError {
    #[error("All API keys exhausted after {attempts} attempts")]
    ExhaustedCredentials { attempts: usize },

    #[error("Search API returned status {status}: {body}")]
    Upstream { status: u16, body: serde_json::Value },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SearchError::InvalidResponse(e.to_string())
        } else {
            SearchError::Network(e.to_string())
        }
    }
}
