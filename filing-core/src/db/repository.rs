use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CalculationRecord, NewCalculationRecord};

/// Most recent calculations kept in the history store. Older entries are
/// evicted on append.
pub const HISTORY_CAP: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Calculation-history store. Writes are append-only: each call persists
/// one complete record and evicts anything beyond [`HISTORY_CAP`], so
/// there is no read-modify-write to race on.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Persist one calculation and return it with its assigned id and
    /// timestamp. Evicts the oldest entries beyond [`HISTORY_CAP`].
    async fn append(
        &self,
        record: NewCalculationRecord,
    ) -> Result<CalculationRecord, RepositoryError>;

    /// The stored calculations, newest first, at most [`HISTORY_CAP`].
    async fn recent(&self) -> Result<Vec<CalculationRecord>, RepositoryError>;

    async fn get(&self, id: i64) -> Result<CalculationRecord, RepositoryError>;

    /// Remove every stored calculation.
    async fn clear(&self) -> Result<(), RepositoryError>;
}
