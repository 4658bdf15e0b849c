//! Application configuration for FHIRCore
//!
//! Each application (identified by its app id) ships a configuration set
//! describing its register screen, side-menu navigation and the
//! questionnaires it can launch. This crate:
//! - Models those configurations with serde (TOML or JSON)
//! - Loads them from ordered sources, later sources overriding earlier ones
//! - Keeps the active application's configuration in a registry
//! - Broadcasts a change event on every load

pub mod app;
pub mod events;
pub mod navigation;
pub mod questionnaire;
pub mod register;
pub mod registry;
pub mod sources;

// Re-export main types
pub use app::AppConfiguration;
pub use events::{ConfigCategory, ConfigChangeEvent, ConfigOperation, ConfigSource as ConfigSourceType};
pub use navigation::{NavigationAction, NavigationConfiguration, NavigationOption};
pub use questionnaire::QuestionnaireConfig;
pub use register::{RegisterViewConfiguration, SearchFilter};
pub use registry::{ConfigurationRegistry, ConfigurationRegistryBuilder};
pub use sources::{ConfigSource, FileSource, StaticSource};

/// Error types for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Application not supported: {0}")]
    UnsupportedApp(String),

    #[error("Source error: {source}")]
    Source {
        source_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConfigError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unsupported_app(app_id: impl Into<String>) -> Self {
        Self::UnsupportedApp(app_id.into())
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
