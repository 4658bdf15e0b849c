use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Health program a register belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthModule {
    Anc,
    Family,
    FamilyPlanning,
    Hiv,
    Tb,
    Malaria,
    ChildHealth,
    Immunization,
    #[default]
    Default,
}

impl HealthModule {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthModule::Anc => "ANC",
            HealthModule::Family => "FAMILY",
            HealthModule::FamilyPlanning => "FAMILY_PLANNING",
            HealthModule::Hiv => "HIV",
            HealthModule::Tb => "TB",
            HealthModule::Malaria => "MALARIA",
            HealthModule::ChildHealth => "CHILD_HEALTH",
            HealthModule::Immunization => "IMMUNIZATION",
            HealthModule::Default => "DEFAULT",
        }
    }
}

impl fmt::Display for HealthModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something the user did on the register screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterEvent {
    SearchRegister {
        search_text: String,
        app_feature_name: Option<String>,
        health_module: HealthModule,
    },
    MoveToNextPage {
        app_feature_name: Option<String>,
        health_module: HealthModule,
    },
    MoveToPreviousPage {
        app_feature_name: Option<String>,
        health_module: HealthModule,
    },
    RegisterNewClient,
    OpenProfile {
        app_feature_name: Option<String>,
        health_module: HealthModule,
        patient_id: String,
    },
}

/// What the screen should do in response to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterAction {
    /// Query `page` again; an empty `search_text` lists everything
    Reload { page: usize, search_text: String },
    LaunchRegistration,
    NavigateToProfile {
        patient_id: String,
        health_module: HealthModule,
    },
}

/// Paging position of a register list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterPaging {
    current_page: usize,
    search_text: String,
}

impl RegisterPaging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Apply `event` and return the resulting action.
    ///
    /// A new search starts over at page 0; paging backwards stops at page 0.
    pub fn handle(&mut self, event: RegisterEvent) -> RegisterAction {
        match event {
            RegisterEvent::SearchRegister {
                search_text,
                health_module,
                ..
            } => {
                self.search_text = search_text.trim().to_string();
                self.current_page = 0;
                debug!(%health_module, search = %self.search_text, "Searching register");
                self.reload()
            }
            RegisterEvent::MoveToNextPage { .. } => {
                self.current_page += 1;
                self.reload()
            }
            RegisterEvent::MoveToPreviousPage { .. } => {
                self.current_page = self.current_page.saturating_sub(1);
                self.reload()
            }
            RegisterEvent::RegisterNewClient => RegisterAction::LaunchRegistration,
            RegisterEvent::OpenProfile {
                health_module,
                patient_id,
                ..
            } => RegisterAction::NavigateToProfile {
                patient_id,
                health_module,
            },
        }
    }

    fn reload(&self) -> RegisterAction {
        RegisterAction::Reload {
            page: self.current_page,
            search_text: self.search_text.clone(),
        }
    }
}
