use serde::{Deserialize, Serialize};

const RESOURCE_TYPE: &str = "QuestionnaireResponse";

fn response_resource_type() -> String {
    RESOURCE_TYPE.to_string()
}

/// Answers captured for a questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    #[serde(default = "response_resource_type")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<QuestionnaireResponseItem>,
}

impl Default for QuestionnaireResponse {
    fn default() -> Self {
        Self {
            resource_type: response_resource_type(),
            id: None,
            questionnaire: None,
            status: None,
            item: Vec::new(),
        }
    }
}

impl QuestionnaireResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return it for further editing
    pub fn add_item(&mut self, link_id: impl Into<String>) -> &mut QuestionnaireResponseItem {
        self.item.push(QuestionnaireResponseItem::new(link_id));
        let last = self.item.len() - 1;
        &mut self.item[last]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponseItem {
    pub link_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<QuestionnaireResponseItem>,
}

impl QuestionnaireResponseItem {
    pub fn new(link_id: impl Into<String>) -> Self {
        Self {
            link_id: link_id.into(),
            ..Default::default()
        }
    }

    pub fn as_label(&self) -> String {
        super::as_label(&self.link_id)
    }
}
