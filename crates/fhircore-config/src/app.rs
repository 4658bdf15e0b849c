//! Configuration set of a single application

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::navigation::NavigationConfiguration;
use crate::questionnaire::QuestionnaireConfig;
use crate::register::RegisterViewConfiguration;
use crate::{ConfigError, Result};

fn default_languages() -> Vec<String> {
    vec!["en".to_string(), "sw".to_string()]
}

/// Everything one application needs: register view, navigation,
/// launchable questionnaires and supported languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfiguration {
    pub app_id: String,
    #[serde(default)]
    pub register_view: RegisterViewConfiguration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationConfiguration>,
    #[serde(default)]
    pub questionnaires: Vec<QuestionnaireConfig>,
    /// BCP 47 language tags offered in the language switcher
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

impl AppConfiguration {
    pub fn new(app_id: impl Into<String>) -> Self {
        let app_id = app_id.into();
        Self {
            register_view: RegisterViewConfiguration::new(app_id.clone(), app_id.clone()),
            app_id,
            navigation: None,
            questionnaires: Vec::new(),
            languages: default_languages(),
        }
    }

    /// Parse from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str::<Self>(toml_str)
            .map_err(|e| ConfigError::parse(format!("TOML parse error: {e}")))?
            .normalized()
    }

    /// Parse from JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json_str)
            .map_err(|e| ConfigError::parse(format!("JSON parse error: {e}")))?
            .normalized()
    }

    /// Parse a file, choosing the format by extension (`.json`, otherwise TOML)
    pub fn from_file_contents(path: &Path, contents: &str) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(contents),
            _ => Self::from_toml(contents),
        }
    }

    pub fn questionnaire(&self, id: &str) -> Option<&QuestionnaireConfig> {
        self.questionnaires.iter().find(|q| q.id == id)
    }

    /// Fill in app ids the nested sections omit, then validate
    fn normalized(mut self) -> Result<Self> {
        if self.register_view.app_id.is_empty() {
            self.register_view.app_id = self.app_id.clone();
        }
        if let Some(navigation) = self.navigation.as_mut()
            && navigation.app_id.is_empty()
        {
            navigation.app_id = self.app_id.clone();
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration set
    pub fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::validation("appId must not be empty"));
        }
        if self.register_view.app_id != self.app_id {
            return Err(ConfigError::validation(format!(
                "registerView.appId '{}' does not match appId '{}'",
                self.register_view.app_id, self.app_id
            )));
        }
        if let Some(navigation) = &self.navigation {
            let duplicates = navigation.duplicate_option_ids();
            if !duplicates.is_empty() {
                return Err(ConfigError::validation(format!(
                    "duplicate navigation option ids: {}",
                    duplicates.join(", ")
                )));
            }
        }
        let mut seen = HashSet::new();
        for questionnaire in &self.questionnaires {
            if !seen.insert(questionnaire.id.as_str()) {
                return Err(ConfigError::validation(format!(
                    "duplicate questionnaire id: {}",
                    questionnaire.id
                )));
            }
        }
        if self.languages.is_empty() {
            return Err(ConfigError::validation("at least one language is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationAction;

    const QUEST_TOML: &str = r#"
appId = "quest"
languages = ["en", "sw"]

[registerView]
appTitle = "Quest"
showFilter = false

[navigation]
classification = "navigation"

[[navigation.navigationOptions]]
id = "patient_registration"
title = "Register patient"
icon = "ic_user"
action = { type = "questionnaire", form = "patient-registration", readOnly = false }

[[questionnaires]]
id = "remove_family"
title = "Remove family"
"#;

    #[test]
    fn test_from_toml() {
        let config = AppConfiguration::from_toml(QUEST_TOML).unwrap();

        assert_eq!(config.app_id, "quest");
        assert_eq!(config.register_view.app_id, "quest");
        assert_eq!(config.register_view.app_title, "Quest");
        assert!(!config.register_view.show_filter);

        let navigation = config.navigation.as_ref().unwrap();
        assert_eq!(navigation.app_id, "quest");
        assert!(matches!(
            navigation.navigation_options[0].action,
            NavigationAction::Questionnaire { .. }
        ));

        assert_eq!(config.questionnaire("remove_family").unwrap().form(), "remove_family");
    }

    #[test]
    fn test_from_json_defaults_languages() {
        let config = AppConfiguration::from_json(r#"{"appId":"anc"}"#).unwrap();
        assert_eq!(config.languages, vec!["en", "sw"]);
        assert_eq!(config.register_view.app_id, "anc");
    }

    #[test]
    fn test_empty_app_id_rejected() {
        let err = AppConfiguration::from_json(r#"{"appId":"  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_mismatched_register_app_id_rejected() {
        let err =
            AppConfiguration::from_json(r#"{"appId":"anc","registerView":{"appId":"quest"}}"#)
                .unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_duplicate_questionnaires_rejected() {
        let err = AppConfiguration::from_json(
            r#"{"appId":"anc","questionnaires":[{"id":"a"},{"id":"a"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate questionnaire id"));
    }

    #[test]
    fn test_parse_error() {
        let err = AppConfiguration::from_toml("appId = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_format_chosen_by_extension() {
        let json = AppConfiguration::from_file_contents(Path::new("app.json"), r#"{"appId":"a"}"#);
        assert!(json.is_ok());

        let toml = AppConfiguration::from_file_contents(Path::new("app.toml"), r#"appId = "a""#);
        assert!(toml.is_ok());
    }
}
