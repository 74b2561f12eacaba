mod client;
mod credentials;
mod errors;
mod models;

pub use client::{TweetSearch, TwitterClient};
pub use credentials::{CredentialSet, EmptyCredentialSet};
pub use errors::SearchError;
pub use models::{SearchPage, TweetItem};
