pub mod factory;
pub mod repository;

pub use factory::SqliteHistoryFactory;
pub use repository::SqliteHistoryRepository;
