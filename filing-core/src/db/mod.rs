pub mod factory;
pub mod repository;

pub use factory::{DbConfig, FactoryRegistry, HistoryStoreFactory};
pub use repository::{HISTORY_CAP, HistoryRepository, RepositoryError};
