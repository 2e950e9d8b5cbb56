pub mod browser;
pub mod config;
pub mod lookup;
pub mod models;
pub mod notifiers;
pub mod opener;
pub mod stock;
pub mod utils;

// Re-export commonly used types
pub use config::AppConfig;
pub use utils::error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;
