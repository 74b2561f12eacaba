mod client;
mod errors;
mod models;

pub use client::{SqliteTweetStore, TweetStore};
pub use errors::StorageError;
pub use models::TweetDocument;
