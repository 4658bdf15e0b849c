//! Configuration registry
//!
//! Holds the configuration sets known to the sources and the one of the
//! application currently loaded. Sources are consulted in registration
//! order; when several know the same app id, the last one wins.

use crate::ConfigError;
use crate::app::AppConfiguration;
use crate::events::{ConfigChangeEvent, ConfigSource as EventSource};
use crate::navigation::NavigationConfiguration;
use crate::questionnaire::QuestionnaireConfig;
use crate::register::RegisterViewConfiguration;
use crate::sources::{ConfigSource, FileSource, StaticSource};

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, info, warn};

/// Configuration registry builder
pub struct ConfigurationRegistryBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigurationRegistryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration file
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Box::new(FileSource::new(path)));
        self
    }

    /// Add in-memory configuration sets
    pub fn with_static(mut self, configs: Vec<AppConfiguration>) -> Self {
        self.sources.push(Box::new(StaticSource::new(configs)));
        self
    }

    /// Add any source
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Build the registry
    pub fn build(self) -> ConfigurationRegistry {
        let (event_tx, _) = broadcast::channel(100);
        ConfigurationRegistry {
            sources: self.sources,
            current: Arc::new(RwLock::new(None)),
            event_bus: event_tx,
        }
    }
}

impl Default for ConfigurationRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of application configurations
pub struct ConfigurationRegistry {
    /// Configuration sources, lowest priority first
    sources: Vec<Box<dyn ConfigSource>>,
    /// Configuration of the loaded application
    current: Arc<RwLock<Option<AppConfiguration>>>,
    /// Event bus for broadcasting loads
    event_bus: broadcast::Sender<ConfigChangeEvent>,
}

impl ConfigurationRegistry {
    /// Create a new builder
    pub fn builder() -> ConfigurationRegistryBuilder {
        ConfigurationRegistryBuilder::new()
    }

    /// Subscribe to configuration loads
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigChangeEvent> {
        self.event_bus.subscribe()
    }

    /// Find the winning configuration for `app_id` across all sources.
    ///
    /// A source that fails to load is skipped with a warning. When no source
    /// provides `app_id`, the last such failure is returned instead of `None`.
    async fn resolve(
        &self,
        app_id: &str,
    ) -> Result<Option<(AppConfiguration, EventSource)>, ConfigError> {
        let mut found = None;
        let mut failure = None;
        for source in &self.sources {
            match source.load().await {
                Ok(configs) => {
                    if let Some(config) = configs.into_iter().rev().find(|c| c.app_id == app_id) {
                        debug!("Source {} provides configuration for {}", source.name(), app_id);
                        found = Some((config, EventSource::from_name(source.name())));
                    }
                }
                Err(e) => {
                    warn!("Failed to load config from {}: {e}", source.name());
                    failure = Some(e);
                }
            }
        }
        match (found, failure) {
            (None, Some(e)) => Err(e),
            (found, _) => Ok(found),
        }
    }

    /// App ids known to any source, sorted and deduplicated
    pub async fn supported_app_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        for source in &self.sources {
            match source.load().await {
                Ok(configs) => ids.extend(configs.into_iter().map(|c| c.app_id)),
                Err(e) => warn!("Failed to load config from {}: {e}", source.name()),
            }
        }
        ids.sort();
        ids.dedup();
        ids
    }

    /// Whether any source knows `app_id`
    pub async fn is_app_supported(&self, app_id: &str) -> bool {
        matches!(self.resolve(app_id).await, Ok(Some(_)))
    }

    /// Load the configuration set of `app_id` and make it current.
    ///
    /// Fails with `UnsupportedApp` when no source knows `app_id`, or with the
    /// source's own error when a failing source may have been the one to.
    pub async fn load_app_configurations(
        &self,
        app_id: &str,
    ) -> Result<AppConfiguration, ConfigError> {
        let (config, source) = self
            .resolve(app_id)
            .await?
            .ok_or_else(|| ConfigError::unsupported_app(app_id))?;

        let first_load = {
            let mut current = self.current.write().await;
            let first_load = current.as_ref().is_none_or(|c| c.app_id != app_id);
            *current = Some(config.clone());
            first_load
        };

        for event in ConfigChangeEvent::sections_loaded(source, &config, first_load) {
            let category = event.category;
            if self.event_bus.send(event).is_err() {
                debug!(%category, "No subscribers for config change event");
            }
        }

        info!(app_id, %source, "Application configuration loaded");
        Ok(config)
    }

    /// Configuration set of the loaded application
    pub async fn app_configuration(&self) -> Option<AppConfiguration> {
        self.current.read().await.clone()
    }

    /// Register view of the loaded application
    pub async fn register_view_configuration(&self) -> Option<RegisterViewConfiguration> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|c| c.register_view.clone())
    }

    /// Navigation of the loaded application
    pub async fn navigation_configuration(&self) -> Option<NavigationConfiguration> {
        self.current
            .read()
            .await
            .as_ref()
            .and_then(|c| c.navigation.clone())
    }

    /// Questionnaire `id` of the loaded application
    pub async fn questionnaire_config(&self, id: &str) -> Option<QuestionnaireConfig> {
        self.current
            .read()
            .await
            .as_ref()
            .and_then(|c| c.questionnaire(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ConfigCategory, ConfigOperation};

    fn registry() -> ConfigurationRegistry {
        let mut anc = AppConfiguration::new("anc");
        anc.register_view.app_title = "ANC".into();
        ConfigurationRegistry::builder()
            .with_static(vec![AppConfiguration::new("quest"), anc])
            .build()
    }

    #[tokio::test]
    async fn test_supported_app_ids() {
        let registry = registry();
        assert_eq!(registry.supported_app_ids().await, vec!["anc", "quest"]);
        assert!(registry.is_app_supported("quest").await);
        assert!(!registry.is_app_supported("unknown").await);
    }

    #[tokio::test]
    async fn test_load_unknown_app() {
        let registry = registry();
        let err = registry.load_app_configurations("unknown").await.unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedApp(id) if id == "unknown"));
        assert!(registry.app_configuration().await.is_none());
    }

    #[tokio::test]
    async fn test_load_sets_current_and_broadcasts() {
        let registry = registry();
        let mut events = registry.subscribe();

        registry.load_app_configurations("anc").await.unwrap();

        let view = registry.register_view_configuration().await.unwrap();
        assert_eq!(view.app_title, "ANC");

        let event = events.recv().await.unwrap();
        assert_eq!(event.app_id, "anc");
        assert_eq!(event.category, ConfigCategory::Application);
        assert_eq!(event.operation, ConfigOperation::Load);
        assert_eq!(event.source, EventSource::Static);
        assert_eq!(events.recv().await.unwrap().category, ConfigCategory::RegisterView);
        assert!(events.try_recv().is_err());

        registry.load_app_configurations("anc").await.unwrap();
        let event = events.recv().await.unwrap();
        assert_eq!(event.operation, ConfigOperation::Reload);
    }

    #[tokio::test]
    async fn test_later_source_wins() {
        let mut override_quest = AppConfiguration::new("quest");
        override_quest.register_view.app_title = "Quest (override)".into();

        let registry = ConfigurationRegistry::builder()
            .with_static(vec![AppConfiguration::new("quest")])
            .with_static(vec![override_quest])
            .build();

        let loaded = registry.load_app_configurations("quest").await.unwrap();
        assert_eq!(loaded.register_view.app_title, "Quest (override)");
    }

    #[tokio::test]
    async fn test_failing_source_is_skipped() {
        let registry = ConfigurationRegistry::builder()
            .with_static(vec![AppConfiguration::new("")])
            .with_static(vec![AppConfiguration::new("quest")])
            .build();

        assert!(registry.load_app_configurations("quest").await.is_ok());
        assert!(registry.navigation_configuration().await.is_none());
        assert!(registry.questionnaire_config("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_source_failure_reported_when_app_missing() {
        let registry = ConfigurationRegistry::builder()
            .with_static(vec![AppConfiguration::new("")])
            .with_static(vec![AppConfiguration::new("quest")])
            .build();

        let err = registry.load_app_configurations("anc").await.unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(!registry.is_app_supported("anc").await);

        let healthy = self::registry();
        assert!(matches!(
            healthy.load_app_configurations("anc-v2").await,
            Err(ConfigError::UnsupportedApp(_))
        ));
    }
}
