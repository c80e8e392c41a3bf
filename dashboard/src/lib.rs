pub mod config;
pub mod error;
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod utils;

pub use config::AppConfig;
pub use infrastructure::Platform;
