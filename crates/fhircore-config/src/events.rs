//! Configuration change events

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::app::AppConfiguration;

/// Source of a configuration change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    /// Configuration loaded from file
    File,
    /// Configuration compiled into the binary or built in memory
    Static,
}

impl ConfigSource {
    /// Map a source name to its event source
    pub fn from_name(name: &str) -> Self {
        match name {
            "file" => Self::File,
            _ => Self::Static,
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Static => write!(f, "static"),
        }
    }
}

/// Category of configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigCategory {
    /// Whole application configuration set
    Application,
    /// Register screen configuration
    RegisterView,
    /// Side-menu navigation
    Navigation,
    /// Launchable questionnaires
    Questionnaire,
}

impl ConfigCategory {
    /// Sections present in `config`, the whole application first
    pub fn present_in(config: &AppConfiguration) -> Vec<Self> {
        let mut categories = vec![Self::Application, Self::RegisterView];
        if config.navigation.is_some() {
            categories.push(Self::Navigation);
        }
        if !config.questionnaires.is_empty() {
            categories.push(Self::Questionnaire);
        }
        categories
    }
}

impl std::fmt::Display for ConfigCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::RegisterView => write!(f, "register_view"),
            Self::Navigation => write!(f, "navigation"),
            Self::Questionnaire => write!(f, "questionnaire"),
        }
    }
}

/// Operation type for configuration changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOperation {
    /// Configuration loaded for the first time
    Load,
    /// Configuration replaced by a later load
    Reload,
}

impl std::fmt::Display for ConfigOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Reload => write!(f, "reload"),
        }
    }
}

/// Event representing a configuration change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigChangeEvent {
    /// Source the winning configuration came from
    pub source: ConfigSource,
    /// Category of configuration that changed
    pub category: ConfigCategory,
    /// Application the configuration belongs to
    pub app_id: String,
    /// Operation type
    pub operation: ConfigOperation,
    /// Timestamp of the change
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl ConfigChangeEvent {
    /// Create a new configuration change event
    pub fn new(
        source: ConfigSource,
        category: ConfigCategory,
        app_id: impl Into<String>,
        operation: ConfigOperation,
    ) -> Self {
        Self {
            source,
            category,
            app_id: app_id.into(),
            operation,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// Event for an application configuration set being (re)loaded
    pub fn app_loaded(source: ConfigSource, app_id: impl Into<String>, first_load: bool) -> Self {
        let operation = if first_load {
            ConfigOperation::Load
        } else {
            ConfigOperation::Reload
        };
        Self::new(source, ConfigCategory::Application, app_id, operation)
    }

    /// One event per section of `config`, the application event first
    pub fn sections_loaded(
        source: ConfigSource,
        config: &AppConfiguration,
        first_load: bool,
    ) -> Vec<Self> {
        let app_event = Self::app_loaded(source, &config.app_id, first_load);
        let operation = app_event.operation;
        let mut events = vec![app_event];
        events.extend(
            ConfigCategory::present_in(config)
                .into_iter()
                .filter(|category| *category != ConfigCategory::Application)
                .map(|category| Self::new(source, category, &config.app_id, operation)),
        );
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::File.to_string(), "file");
        assert_eq!(ConfigSource::Static.to_string(), "static");
        assert_eq!(ConfigSource::from_name("file"), ConfigSource::File);
        assert_eq!(ConfigSource::from_name("static"), ConfigSource::Static);
    }

    #[test]
    fn test_sections_loaded() {
        let bare = AppConfiguration::new("anc");
        let categories: Vec<ConfigCategory> =
            ConfigChangeEvent::sections_loaded(ConfigSource::Static, &bare, true)
                .into_iter()
                .map(|e| e.category)
                .collect();
        assert_eq!(
            categories,
            vec![ConfigCategory::Application, ConfigCategory::RegisterView]
        );

        let mut full = AppConfiguration::new("quest");
        full.navigation = Some(crate::NavigationConfiguration::new("quest"));
        full.questionnaires
            .push(serde_json::from_str(r#"{"id":"remove_family"}"#).unwrap());

        let events = ConfigChangeEvent::sections_loaded(ConfigSource::File, &full, false);
        assert_eq!(events.len(), 4);
        assert_eq!(events[2].category, ConfigCategory::Navigation);
        assert_eq!(events[3].category, ConfigCategory::Questionnaire);
        assert!(events.iter().all(|e| e.operation == ConfigOperation::Reload));
        assert!(events.iter().all(|e| e.app_id == "quest"));
    }

    #[test]
    fn test_app_loaded_event() {
        let first = ConfigChangeEvent::app_loaded(ConfigSource::File, "quest", true);
        assert_eq!(first.operation, ConfigOperation::Load);
        assert_eq!(first.category, ConfigCategory::Application);
        assert_eq!(first.app_id, "quest");

        let again = ConfigChangeEvent::app_loaded(ConfigSource::File, "quest", false);
        assert_eq!(again.operation, ConfigOperation::Reload);
    }

    #[test]
    fn test_event_serialization() {
        let event = ConfigChangeEvent::app_loaded(ConfigSource::Static, "anc", true);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["source"], "static");
        assert_eq!(json["category"], "application");
        assert_eq!(json["operation"], "load");
    }
}
