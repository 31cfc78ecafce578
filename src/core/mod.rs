pub mod config;
pub mod error;
pub mod types;

pub use config::AiConfig;
pub use error::{AiError, Result};
