use std::collections::HashMap;
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};
use crate::cache::{hashtag_query, TweetCache};
use crate::sentiment::{SentimentAnalyzer, SentimentPercentages};
use super::errors::ApiError;

const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Collaborators shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<TweetCache>,
    pub analyzer: Arc<SentimentAnalyzer>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FetchTweetsResponse {
    pub hashtag: String,
    pub sentiment_analysis: SentimentPercentages,
    pub tweets: Vec<String>,
}

pub fn routes(
    state: AppState,
    static_dir: PathBuf,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    index(static_dir)
        .or(fetch_tweets(state))
        .recover(handle_rejection)
        .with(warp::log::custom(|info| {
            info!("Request: {} {} {}",
                info.method(),
                info.path(),
                info.status().as_u16()
            );
        }))
}

pub fn with_state(
    state: AppState,
) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn index(
    static_dir: PathBuf,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .and(warp::fs::file(static_dir.join("index.html")))
}

fn fetch_tweets(
    state: AppState,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path("fetch_tweets")
        .and(warp::path::end())
        .and(warp::post())
        .and(optional_form())
        .and(with_state(state))
        .and_then(handle_fetch_tweets)
}

/// Form fields, or none when the body is missing or not form-encoded.
fn optional_form(
) -> impl Filter<Extract = (HashMap<String, String>,), Error = Infallible> + Clone {
    warp::body::content_length_limit(MAX_FORM_BYTES)
        .and(warp::body::form::<HashMap<String, String>>())
        .or(warp::any().map(HashMap::new))
        .unify()
}

async fn handle_fetch_tweets(
    form: HashMap<String, String>,
    state: AppState,
) -> Result<warp::reply::Response, Infallible> {
    let hashtag = form.get("hashtag").map(|h| h.trim()).unwrap_or_default();

    let Some(query) = hashtag_query(hashtag) else {
        warn!("Rejected fetch_tweets request without a hashtag");
        return Ok(ApiError::BadRequest("Hashtag is required".to_string()).into_response());
    };

    let lookup = match state.cache.get_or_fetch(&query).await {
        Ok(lookup) => lookup,
        Err(e) => {
            error!("Failed to get tweets for {}: {}", query, e);
            return Ok(ApiError::from(e).into_response());
        }
    };

    let sentiment_analysis = state.analyzer.aggregate(&lookup.tweets);
    info!("Sentiment for {} ({:?}): {:?}", query, lookup.source, sentiment_analysis);

    let response = FetchTweetsResponse {
        hashtag: hashtag.to_string(),
        sentiment_analysis,
        tweets: lookup.tweets.into_iter().map(|tweet| tweet.text).collect(),
    };

    Ok(warp::reply::with_status(warp::reply::json(&response), StatusCode::OK).into_response())
}

/// Turns every rejection into a JSON error body.
async fn handle_rejection(err: Rejection) -> Result<ApiError, Infallible> {
    let api_error = if err.is_not_found() {
        ApiError::NotFound
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ApiError::MethodNotAllowed
    } else {
        error!("Unhandled rejection: {:?}", err);
        ApiError::Internal("Internal server error".to_string())
    };
    Ok(api_error)
}
