use async_trait::async_trait;
use chrono::{DateTime, Utc};
use filing_core::{
    CalculationRecord, FilingStatus, HistoryRepository, NewCalculationRecord, RepositoryError,
    db::HISTORY_CAP,
};
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::FromRow;
use std::str::FromStr;
use tracing::debug;

/// SQLite-backed calculation history.
///
/// Decimal amounts are stored as TEXT and timestamps as
/// `%Y-%m-%d %H:%M:%S` strings. The store enforces the history cap on
/// every append by deleting rows beyond the newest [`HISTORY_CAP`].
pub struct SqliteHistoryRepository {
    pool: SqlitePool,
}

impl SqliteHistoryRepository {
    /// Connect to `database_url`: a sqlx SQLite URL, a bare file path
    /// (created if missing), or `:memory:`.
    pub async fn new(database_url: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| RepositoryError::Configuration(e.to_string()))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), RepositoryError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(FromRow)]
struct CalculationRecordRow {
    id: i64,
    filing_status: String,
    gross_income: String,
    dependents: i64,
    itemized_deductions: String,
    taxable_income: String,
    tax_liability: String,
    effective_rate: String,
    created_at: String,
}

impl TryFrom<CalculationRecordRow> for CalculationRecord {
    type Error = RepositoryError;

    fn try_from(row: CalculationRecordRow) -> Result<Self, Self::Error> {
        let filing_status = FilingStatus::parse(&row.filing_status).ok_or_else(|| {
            RepositoryError::Database(format!("Invalid filing status: {}", row.filing_status))
        })?;
        let dependents = u32::try_from(row.dependents).map_err(|_| {
            RepositoryError::Database(format!("Invalid dependent count: {}", row.dependents))
        })?;

        Ok(CalculationRecord {
            id: row.id,
            filing_status,
            gross_income: parse_decimal(&row.gross_income)?,
            dependents,
            itemized_deductions: parse_decimal(&row.itemized_deductions)?,
            taxable_income: parse_decimal(&row.taxable_income)?,
            tax_liability: parse_decimal(&row.tax_liability)?,
            effective_rate: parse_decimal(&row.effective_rate)?,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}

fn parse_decimal(s: &str) -> Result<Decimal, RepositoryError> {
    s.parse::<Decimal>()
        .map_err(|e| RepositoryError::Database(format!("Failed to parse decimal '{}': {}", s, e)))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map(|naive| naive.and_utc())
        .map_err(|e| RepositoryError::Database(format!("Failed to parse datetime '{}': {}", s, e)))
}

const SELECT_COLUMNS: &str = "SELECT id, filing_status, gross_income, dependents, \
     itemized_deductions, taxable_income, tax_liability, effective_rate, created_at \
     FROM calculation_history";

#[async_trait]
impl HistoryRepository for SqliteHistoryRepository {
    async fn append(
        &self,
        record: NewCalculationRecord,
    ) -> Result<CalculationRecord, RepositoryError> {
        let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let result = sqlx::query(
            "INSERT INTO calculation_history (
                filing_status, gross_income, dependents, itemized_deductions,
                taxable_income, tax_liability, effective_rate, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.filing_status.as_str())
        .bind(record.gross_income.to_string())
        .bind(i64::from(record.dependents))
        .bind(record.itemized_deductions.to_string())
        .bind(record.taxable_income.to_string())
        .bind(record.tax_liability.to_string())
        .bind(record.effective_rate.to_string())
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();

        // Evict everything beyond the newest HISTORY_CAP rows. Rowids are
        // monotonic, so recency order is insertion order.
        let evicted = sqlx::query(
            "DELETE FROM calculation_history WHERE id NOT IN (
                SELECT id FROM calculation_history ORDER BY id DESC LIMIT ?
            )",
        )
        .bind(HISTORY_CAP as i64)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if evicted.rows_affected() > 0 {
            debug!(evicted = evicted.rows_affected(), "history cap enforced");
        }

        self.get(id).await
    }

    async fn recent(&self) -> Result<Vec<CalculationRecord>, RepositoryError> {
        let rows: Vec<CalculationRecordRow> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY id DESC LIMIT ?"))
                .bind(HISTORY_CAP as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn get(&self, id: i64) -> Result<CalculationRecord, RepositoryError> {
        let row: CalculationRecordRow = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?
            .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM calculation_history")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }
}
