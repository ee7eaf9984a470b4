pub mod calculations;
pub mod db;
pub mod models;
pub mod tables;

pub use calculations::{compute_rebate, compute_tax};
pub use db::repository::{HistoryRepository, RepositoryError};
pub use models::*;
