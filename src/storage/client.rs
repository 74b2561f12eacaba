use std::path::Path;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use super::errors::StorageError;
use super::models::TweetDocument;

/// Document-style store holding one entry per hashtag.
#[async_trait]
pub trait TweetStore: Send + Sync {
    async fn find_one(&self, hashtag: &str) -> Result<Option<TweetDocument>, StorageError>;
    async fn insert_one(&self, document: &TweetDocument) -> Result<(), StorageError>;
}

#[derive(Clone)]
pub struct SqliteTweetStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTweetStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(&path)?;
        info!("Opened tweet store at {:?}", path.as_ref());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tweet_documents (
                hashtag TEXT PRIMARY KEY,
                tweets TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(SqliteTweetStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` against the connection off the async executor.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StorageError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            f(&*conn)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }
}

#[async_trait]
impl TweetStore for SqliteTweetStore {
    async fn find_one(&self, hashtag: &str) -> Result<Option<TweetDocument>, StorageError> {
        let hashtag = hashtag.to_string();
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare_cached(
                "SELECT tweets, created_at FROM tweet_documents WHERE hashtag = ?1",
            )?;
            let row = stmt
                .query_row([&hashtag], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
                })
                .optional()?;

            match row {
                Some((tweets, created_at)) => {
                    debug!("Found stored document for {}", hashtag);
                    Ok(Some(TweetDocument {
                        tweets: serde_json::from_str(&tweets)?,
                        created_at: DateTime::from_timestamp(created_at, 0)
                            .unwrap_or_else(Utc::now),
                        hashtag,
                    }))
                }
                None => Ok(None),
            }
        })
        .await
    }

    async fn insert_one(&self, document: &TweetDocument) -> Result<(), StorageError> {
        let hashtag = document.hashtag.clone();
        let tweets = serde_json::to_string(&document.tweets)?;
        let created_at = document.created_at.timestamp();
        self.with_conn(move |conn| {
            // concurrent misses for one hashtag: last write wins
            let mut stmt = conn.prepare_cached(
                "INSERT OR REPLACE INTO tweet_documents (hashtag, tweets, created_at) VALUES (?1, ?2, ?3)",
            )?;
            stmt.execute(params![hashtag, tweets, created_at])?;
            info!("Stored tweets for {}", hashtag);
            Ok(())
        })
        .await
    }
}
