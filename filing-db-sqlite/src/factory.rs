use async_trait::async_trait;

use filing_core::db::repository::{HistoryRepository, RepositoryError};
use filing_core::db::{DbConfig, HistoryStoreFactory};

use crate::repository::SqliteHistoryRepository;

/// [`HistoryStoreFactory`] for SQLite.
///
/// Register this with a [`filing_core::db::FactoryRegistry`] to make the
/// `"sqlite"` backend available:
///
/// ```rust,no_run
/// use filing_core::db::FactoryRegistry;
/// use filing_db_sqlite::SqliteHistoryFactory;
///
/// let mut registry = FactoryRegistry::new();
/// registry.register(Box::new(SqliteHistoryFactory));
/// ```
pub struct SqliteHistoryFactory;

#[async_trait]
impl HistoryStoreFactory for SqliteHistoryFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Open the database described by `config.connection_string` and run
    /// migrations.
    ///
    /// Accepted connection-string values:
    /// * A bare file path — e.g. `history.db`. The file is created if it
    ///   does not exist.
    /// * `:memory:` — an ephemeral in-memory database (useful for tests).
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn HistoryRepository>, RepositoryError> {
        let repo = SqliteHistoryRepository::new(&config.connection_string).await?;
        repo.run_migrations().await?;
        Ok(Box::new(repo))
    }
}
