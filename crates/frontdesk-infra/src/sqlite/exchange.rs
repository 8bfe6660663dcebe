//! SQLite exchange repository implementation.
//!
//! Implements `ExchangeRepository` from `frontdesk-core` using sqlx with
//! split read/write pools. One INSERT per exchange, no batching.

use chrono::{DateTime, Utc};
use sqlx::Row;

use frontdesk_core::repository::exchange::ExchangeRepository;
use frontdesk_types::error::StorageError;
use frontdesk_types::exchange::ChatExchange;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ExchangeRepository`.
#[derive(Clone)]
pub struct SqliteExchangeRepository {
    pool: DatabasePool,
}

impl SqliteExchangeRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Fetch the most recent exchange, if any. Used by tests and diagnostics.
    pub async fn latest(&self) -> Result<Option<ChatExchange>, StorageError> {
        let row = sqlx::query(
            "SELECT user_input, ai_response, ip_address, created_at
             FROM conversation_logs ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(map_sqlx_error)?;

        row.map(|row| {
            let created_at: String = row.try_get("created_at").map_err(map_sqlx_error)?;
            Ok(ChatExchange {
                requester_address: row.try_get("ip_address").map_err(map_sqlx_error)?,
                input_text: row.try_get("user_input").map_err(map_sqlx_error)?,
                output_text: row.try_get("ai_response").map_err(map_sqlx_error)?,
                created_at: parse_datetime(&created_at)?,
            })
        })
        .transpose()
    }
}

impl ExchangeRepository for SqliteExchangeRepository {
    async fn record(&self, exchange: &ChatExchange) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO conversation_logs (user_input, ai_response, ip_address, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&exchange.input_text)
        .bind(&exchange.output_text)
        .bind(&exchange.requester_address)
        .bind(exchange.created_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM conversation_logs")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;
        row.try_get("cnt").map_err(map_sqlx_error)
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StorageError::Connection
        }
        other => StorageError::Query(other.to_string()),
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::Query(format!("invalid timestamp: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_repo(dir: &tempfile::TempDir) -> SqliteExchangeRepository {
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = DatabasePool::new(&url).await.unwrap();
        SqliteExchangeRepository::new(pool)
    }

    #[tokio::test]
    async fn record_appends_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let repo = temp_repo(&dir).await;

        assert_eq!(repo.count().await.unwrap(), 0);

        let exchange = ChatExchange::new("127.0.0.1", "Hello", "Hi there!");
        repo.record(&exchange).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);

        let stored = repo.latest().await.unwrap().unwrap();
        assert_eq!(stored.requester_address, "127.0.0.1");
        assert_eq!(stored.input_text, "Hello");
        assert_eq!(stored.output_text, "Hi there!");
        assert_eq!(
            stored.created_at.timestamp(),
            exchange.created_at.timestamp()
        );
    }

    #[tokio::test]
    async fn ping_succeeds_on_open_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = temp_repo(&dir).await;
        repo.ping().await.unwrap();
    }

    #[tokio::test]
    async fn record_reports_error_when_table_is_gone() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = DatabasePool::new(&url).await.unwrap();
        let repo = SqliteExchangeRepository::new(pool.clone());

        sqlx::query("DROP TABLE conversation_logs")
            .execute(&pool.writer)
            .await
            .unwrap();

        let exchange = ChatExchange::new("127.0.0.1", "Hello", "Hi there!");
        let err = repo.record(&exchange).await.unwrap_err();
        assert!(matches!(err, StorageError::Query(_)));
    }
}
