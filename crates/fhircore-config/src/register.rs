//! Register screen configuration

use serde::{Deserialize, Serialize};

/// Filter applied to every register query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

/// Look and behavior of the register screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterViewConfiguration {
    pub app_id: String,
    pub app_title: String,
    pub filter_text: String,
    pub search_bar_hint: String,
    pub new_client_button_text: String,
    pub show_search_bar: bool,
    pub show_filter: bool,
    pub switch_languages: bool,
    pub show_scan_qr_code: bool,
    pub show_new_client_button: bool,
    pub registration_form: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_filter: Option<SearchFilter>,
}

impl Default for RegisterViewConfiguration {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_title: "FHIRCore".to_string(),
            filter_text: "Show overdue".to_string(),
            search_bar_hint: "Search name or ID".to_string(),
            new_client_button_text: "Register new client".to_string(),
            show_search_bar: true,
            show_filter: true,
            switch_languages: true,
            show_scan_qr_code: true,
            show_new_client_button: true,
            registration_form: "patient-registration".to_string(),
            primary_filter: None,
        }
    }
}

impl RegisterViewConfiguration {
    pub fn new(app_id: impl Into<String>, app_title: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_title: app_title.into(),
            ..Default::default()
        }
    }
}
