//! In-memory configuration source

use crate::app::AppConfiguration;
use crate::sources::ConfigSource;
use crate::ConfigError;

use async_trait::async_trait;

/// Configuration sets held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    configs: Vec<AppConfiguration>,
}

impl StaticSource {
    pub fn new(configs: Vec<AppConfiguration>) -> Self {
        Self { configs }
    }

    pub fn with(mut self, config: AppConfiguration) -> Self {
        self.configs.push(config);
        self
    }
}

#[async_trait]
impl ConfigSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> Result<Vec<AppConfiguration>, ConfigError> {
        for config in &self.configs {
            config.validate()?;
        }
        Ok(self.configs.clone())
    }
}
