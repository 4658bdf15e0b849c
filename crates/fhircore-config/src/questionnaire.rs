use serde::{Deserialize, Serialize};

/// A questionnaire the application can launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireConfig {
    pub id: String,
    /// Questionnaire resource id; defaults to `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub read_only: bool,
}

impl QuestionnaireConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            form: None,
            title: None,
            read_only: false,
        }
    }

    /// Questionnaire resource id to load
    pub fn form(&self) -> &str {
        self.form.as_deref().unwrap_or(&self.id)
    }
}
