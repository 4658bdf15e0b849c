//! Configuration sources
//!
//! This module provides different sources for application configuration:
//! - File: a TOML or JSON file holding one application's configuration set
//! - Static: configuration sets built in memory (tests, bundled defaults)

mod file;
mod memory;

pub use file::FileSource;
pub use memory::StaticSource;

use crate::app::AppConfiguration;
use crate::ConfigError;

use async_trait::async_trait;

/// Trait for configuration sources
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Name of this source (for logging and debugging)
    fn name(&self) -> &str;

    /// Load every application configuration this source knows about
    async fn load(&self) -> Result<Vec<AppConfiguration>, ConfigError>;
}
