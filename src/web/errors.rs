use serde_json::{json, Value};
use thiserror::Error;
use warp::http::StatusCode;
use crate::cache::CacheError;
use crate::twitter::SearchError;

/// Everything the HTTP layer can answer with besides a success body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("All API keys exhausted")]
    ExhaustedCredentials,

    #[error("Search API error {status}")]
    Upstream { status: u16, body: Value },

    #[error("{0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ExhaustedCredentials => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// `{"error": ...}`; upstream bodies are passed through untouched.
    pub fn body(&self) -> Value {
        match self {
            ApiError::Upstream { body, .. } => json!({ "error": body }),
            other => json!({ "error": other.to_string() }),
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::ExhaustedCredentials { .. } => ApiError::ExhaustedCredentials,
            SearchError::Upstream { status, body } => ApiError::Upstream { status, body },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CacheError> for ApiError {
    fn from(e: CacheError) -> Self {
        match e {
            CacheError::Search(e) => e.into(),
            // store details stay in the log
            CacheError::Storage(_) => ApiError::Internal("Internal server error".to_string()),
        }
    }
}

impl warp::Reply for ApiError {
    fn into_response(self) -> warp::reply::Response {
        let status = self.status();
        warp::reply::with_status(warp::reply::json(&self.body()), status).into_response()
    }
}
