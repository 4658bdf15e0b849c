//! Register filter state
//!
//! Each piece of register screen state is its own [`ObservableCell`], so a
//! view can follow the filter without being woken by sync updates.

use crate::cell::ObservableCell;
use crate::error::Result;
use crate::sync::SyncJobStatus;

use fhircore_config::{AppConfiguration, RegisterViewConfiguration};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

const DEFAULT_LANGUAGE_TAGS: [&str; 2] = ["en", "sw"];
const ENGLISH: &str = "en";

/// Filters the register can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegisterFilterType {
    SearchFilter,
    OverdueFilter,
}

/// A display language offered in the language switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub tag: String,
    pub display_name: String,
}

impl Language {
    pub fn from_tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let display_name = match tag.as_str() {
            "en" => "English",
            "sw" => "Swahili",
            "fr" => "French",
            "ar" => "Arabic",
            "es" => "Spanish",
            "pt" => "Portuguese",
            other => other,
        }
        .to_string();
        Self { tag, display_name }
    }
}

pub struct RegisterFilterState {
    language_tags: Vec<String>,
    filter_value: ObservableCell<(RegisterFilterType, bool)>,
    refresh_register_data: ObservableCell<bool>,
    last_sync_timestamp: ObservableCell<String>,
    languages: ObservableCell<Vec<Language>>,
    register_view_configuration: ObservableCell<RegisterViewConfiguration>,
}

impl RegisterFilterState {
    pub fn new() -> Self {
        Self::with_language_tags(DEFAULT_LANGUAGE_TAGS)
    }

    /// State whose language switcher offers `tags`
    pub fn with_language_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language_tags: tags.into_iter().map(Into::into).collect(),
            filter_value: ObservableCell::new((RegisterFilterType::SearchFilter, false)),
            refresh_register_data: ObservableCell::new(false),
            last_sync_timestamp: ObservableCell::default(),
            languages: ObservableCell::default(),
            register_view_configuration: ObservableCell::default(),
        }
    }

    /// State set up for a loaded application
    pub fn for_app(config: &AppConfiguration) -> Self {
        let state = Self::with_language_tags(config.languages.iter().cloned());
        state.update_view_configurations(config.register_view.clone());
        state
    }

    pub fn update_filter_value(&self, filter_type: RegisterFilterType, value: bool) {
        debug!(?filter_type, value, "Register filter changed");
        self.filter_value.set((filter_type, value));
    }

    pub fn set_refresh_register_data(&self, refresh: bool) {
        self.refresh_register_data.set(refresh);
    }

    pub fn set_last_sync_timestamp(&self, timestamp: impl Into<String>) {
        self.last_sync_timestamp.set(timestamp.into());
    }

    /// Publish the languages of the configured tags.
    ///
    /// English is always offered and always first, even when not configured.
    /// Duplicate tags are listed once; other tags keep their configured order.
    pub fn load_languages(&self) {
        let mut languages = vec![Language::from_tag(ENGLISH)];
        for tag in &self.language_tags {
            if !languages.iter().any(|l| &l.tag == tag) {
                languages.push(Language::from_tag(tag.as_str()));
            }
        }
        self.languages.set(languages);
    }

    pub fn update_view_configurations(&self, config: RegisterViewConfiguration) {
        debug!(app_id = %config.app_id, "Register view configuration updated");
        self.register_view_configuration.set(config);
    }

    /// Apply a sync job state.
    ///
    /// A finished or failed job records its time as the last sync; a
    /// finished one also asks the register to reload.
    pub fn on_sync_state(&self, status: &SyncJobStatus) -> Result<()> {
        match status {
            SyncJobStatus::Finished { timestamp } => {
                self.set_last_sync_timestamp(timestamp.to_display_string()?);
                self.set_refresh_register_data(true);
                info!(%timestamp, "Sync finished");
            }
            SyncJobStatus::Failed { timestamp, reason } => {
                self.set_last_sync_timestamp(timestamp.to_display_string()?);
                warn!(%timestamp, reason = %reason, "Sync failed");
            }
            SyncJobStatus::Started | SyncJobStatus::InProgress { .. } => {}
        }
        Ok(())
    }

    /// Apply sync states from `receiver` until the broadcaster goes away
    pub async fn follow_sync(&self, mut receiver: broadcast::Receiver<SyncJobStatus>) {
        loop {
            match receiver.recv().await {
                Ok(status) => {
                    if let Err(e) = self.on_sync_state(&status) {
                        warn!(error = %e, "Failed to apply sync state");
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!(missed = n, "Register lagged behind sync states");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("Sync channel closed");
                    break;
                }
            }
        }
    }

    pub fn filter_value(&self) -> (RegisterFilterType, bool) {
        self.filter_value.get()
    }

    pub fn refresh_register_data(&self) -> bool {
        self.refresh_register_data.get()
    }

    pub fn last_sync_timestamp(&self) -> String {
        self.last_sync_timestamp.get()
    }

    pub fn languages(&self) -> Vec<Language> {
        self.languages.get()
    }

    pub fn register_view_configuration(&self) -> RegisterViewConfiguration {
        self.register_view_configuration.get()
    }

    pub fn subscribe_filter_value(&self) -> watch::Receiver<(RegisterFilterType, bool)> {
        self.filter_value.subscribe()
    }

    pub fn subscribe_refresh_register_data(&self) -> watch::Receiver<bool> {
        self.refresh_register_data.subscribe()
    }

    pub fn subscribe_last_sync_timestamp(&self) -> watch::Receiver<String> {
        self.last_sync_timestamp.subscribe()
    }

    pub fn subscribe_languages(&self) -> watch::Receiver<Vec<Language>> {
        self.languages.subscribe()
    }

    pub fn subscribe_register_view_configuration(
        &self,
    ) -> watch::Receiver<RegisterViewConfiguration> {
        self.register_view_configuration.subscribe()
    }
}

impl Default for RegisterFilterState {
    fn default() -> Self {
        Self::new()
    }
}
