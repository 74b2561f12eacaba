use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to (de)serialize stored tweets: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage task failed: {0}")]
    Task(String),
}
