//! File-based configuration source

use crate::app::AppConfiguration;
use crate::sources::ConfigSource;
use crate::ConfigError;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-based configuration source
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the configuration file
    async fn read_config(&self) -> Result<Vec<AppConfiguration>, ConfigError> {
        let path = &self.path;

        if !tokio::fs::try_exists(path).await? {
            debug!("Config file does not exist: {:?}", path);
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config = AppConfiguration::from_file_contents(path, &content).map_err(|e| {
            ConfigError::Source {
                source_name: format!("file:{}", path.display()),
                source: Box::new(e),
            }
        })?;

        debug!(app_id = %config.app_id, "Loaded configuration from {:?}", path);
        Ok(vec![config])
    }
}

#[async_trait]
impl ConfigSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> Result<Vec<AppConfiguration>, ConfigError> {
        self.read_config().await
    }
}
