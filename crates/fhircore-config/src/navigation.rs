//! Side-menu navigation configuration

use serde::{Deserialize, Serialize};

/// What happens when a navigation option is selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NavigationAction {
    /// Open a questionnaire
    #[serde(rename = "questionnaire")]
    Questionnaire {
        form: String,
        #[serde(rename = "readOnly", default)]
        read_only: bool,
    },
    /// Open the answered-questionnaire list for a classification
    #[serde(rename = "questionnaire_data_details")]
    QuestionnaireDataDetails { classification: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationOption {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub action: NavigationAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationConfiguration {
    /// Filled from the enclosing application when omitted
    #[serde(default)]
    pub app_id: String,
    #[serde(default = "default_classification")]
    pub classification: String,
    #[serde(default)]
    pub navigation_options: Vec<NavigationOption>,
}

fn default_classification() -> String {
    "navigation".to_string()
}

impl NavigationConfiguration {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            classification: default_classification(),
            navigation_options: Vec::new(),
        }
    }

    pub fn option(&self, id: &str) -> Option<&NavigationOption> {
        self.navigation_options.iter().find(|option| option.id == id)
    }

    /// Ids declared more than once
    pub fn duplicate_option_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for option in &self.navigation_options {
            if !seen.insert(option.id.as_str()) && !duplicates.contains(&option.id.as_str()) {
                duplicates.push(option.id.as_str());
            }
        }
        duplicates
    }
}
