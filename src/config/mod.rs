pub mod app_config;

// Re-export common types for convenience
pub use app_config::{ApiConfig, AppConfig, LoggingConfig};
