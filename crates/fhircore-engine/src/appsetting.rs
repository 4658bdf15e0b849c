//! Application selection state
//!
//! Backs the screen where the user enters the id of the application to run.

use crate::cell::ObservableCell;
use crate::error::{EngineError, Result};

use fhircore_config::{AppConfiguration, ConfigurationRegistry};
use tokio::sync::watch;
use tracing::{info, warn};

/// Outcome of a successful application load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSelection {
    pub config: AppConfiguration,
    /// Whether the user asked to skip this screen next time
    pub remember: bool,
}

impl AppSelection {
    /// App id the caller should persist, if the user asked to remember it
    pub fn remembered_app_id(&self) -> Option<&str> {
        self.remember.then_some(self.config.app_id.as_str())
    }
}

#[derive(Debug, Default)]
pub struct AppSettingState {
    app_id: ObservableCell<String>,
    remember_app: ObservableCell<bool>,
    /// `None` until a load is attempted, then whether the app is supported
    load_configs: ObservableCell<Option<bool>>,
}

impl AppSettingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_application_id_changed(&self, app_id: impl Into<String>) {
        self.app_id.set(app_id.into());
    }

    pub fn on_remember_app_checked(&self, remember: bool) {
        self.remember_app.set(remember);
    }

    /// Load the configurations of the entered application.
    ///
    /// Publishes whether `registry` supports the app before loading, so
    /// an unsupported id yields `Ok(None)` with `load_configs` at `false`.
    /// Persisting a remembered app id is left to the caller.
    pub async fn load_configurations(
        &self,
        registry: &ConfigurationRegistry,
    ) -> Result<Option<AppSelection>> {
        let app_id = self.app_id.get().trim().to_string();
        if app_id.is_empty() {
            return Err(EngineError::invalid_state("application id is empty"));
        }

        let supported = registry.is_app_supported(&app_id).await;
        self.load_configs.set(Some(supported));
        if !supported {
            warn!(app_id = %app_id, "Application not supported");
            return Ok(None);
        }

        let config = registry.load_app_configurations(&app_id).await?;
        let remember = self.remember_app.get();
        info!(app_id = %app_id, remember, "Application selected");
        Ok(Some(AppSelection { config, remember }))
    }

    pub fn app_id(&self) -> String {
        self.app_id.get()
    }

    pub fn remember_app(&self) -> bool {
        self.remember_app.get()
    }

    pub fn load_configs(&self) -> Option<bool> {
        self.load_configs.get()
    }

    pub fn subscribe_app_id(&self) -> watch::Receiver<String> {
        self.app_id.subscribe()
    }

    pub fn subscribe_remember_app(&self) -> watch::Receiver<bool> {
        self.remember_app.subscribe()
    }

    pub fn subscribe_load_configs(&self) -> watch::Receiver<Option<bool>> {
        self.load_configs.subscribe()
    }
}
