use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::filter::{FieldFilter, FieldType};
use super::item::{DepthFirst, QuestionnaireItem};
use crate::error::{CoreError, Result};
use crate::extension::{Extension, HasExtensions};
use crate::extension_urls::{CQF_LIBRARY, EXTRACTION_URLS, LIBRARY_PREFIX};

const RESOURCE_TYPE: &str = "Questionnaire";

fn questionnaire_resource_type() -> String {
    RESOURCE_TYPE.to_string()
}

/// A structured form definition composed of nested items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    #[serde(default = "questionnaire_resource_type")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<QuestionnaireItem>,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self {
            resource_type: questionnaire_resource_type(),
            id: None,
            url: None,
            name: None,
            title: None,
            extension: Vec::new(),
            item: Vec::new(),
        }
    }
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a questionnaire from a FHIR JSON value.
    ///
    /// Every item, at any depth, must carry a non-empty `linkId`.
    pub fn from_json(value: Value) -> Result<Self> {
        let questionnaire: Questionnaire = serde_json::from_value(value)?;
        if questionnaire.resource_type != RESOURCE_TYPE {
            return Err(CoreError::unexpected_resource_type(
                RESOURCE_TYPE,
                questionnaire.resource_type,
            ));
        }
        if let Some(position) = questionnaire
            .items()
            .position(|item| item.link_id.trim().is_empty())
        {
            return Err(CoreError::invalid_resource(format!(
                "item {position} (depth-first) has an empty linkId"
            )));
        }
        Ok(questionnaire)
    }

    /// Parse a questionnaire from FHIR JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json(serde_json::from_str(json)?)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn with_item(mut self, item: QuestionnaireItem) -> Self {
        self.item.push(item);
        self
    }

    /// Whether submitted responses must go through data extraction.
    ///
    /// True iff the questionnaire declares a target StructureMap or an item
    /// extraction context.
    pub fn is_extraction_candidate(&self) -> bool {
        self.has_any_extension(&EXTRACTION_URLS)
    }

    /// Ids of the CQL libraries referenced through `cqf-library` extensions.
    ///
    /// Values are reduced to the part after `Library/`. A value without that
    /// prefix, or without a string value at all, yields an empty id.
    pub fn cqf_library_ids(&self) -> Vec<String> {
        self.extensions_by_url(CQF_LIBRARY)
            .map(|ext| {
                ext.value_as_str()
                    .and_then(|reference| reference.strip_prefix(LIBRARY_PREFIX))
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }

    /// All items, depth-first in document order
    pub fn items(&self) -> DepthFirst<'_> {
        DepthFirst::new(&self.item)
    }

    /// First item whose link id equals `link_id`
    pub fn find(&self, link_id: &str) -> Option<&QuestionnaireItem> {
        self.items().find(|item| item.link_id == link_id)
    }

    /// Mutable access to the first item whose link id equals `link_id`
    pub fn find_mut(&mut self, link_id: &str) -> Option<&mut QuestionnaireItem> {
        find_in_mut(&mut self.item, link_id)
    }

    /// Every item matching `filter`, depth-first in document order
    pub fn find_by(&self, filter: &FieldFilter) -> Vec<&QuestionnaireItem> {
        let found: Vec<&QuestionnaireItem> =
            self.items().filter(|item| filter.matches(item)).collect();
        debug!(
            questionnaire = self.id.as_deref().unwrap_or_default(),
            ?filter,
            matches = found.len(),
            "questionnaire item lookup"
        );
        found
    }

    /// Every item whose `field` equals `value`
    pub fn find_by_field(&self, field: FieldType, value: &str) -> Vec<&QuestionnaireItem> {
        self.find_by(&FieldFilter::new(field, value))
    }
}

impl HasExtensions for Questionnaire {
    fn extensions(&self) -> &[Extension] {
        &self.extension
    }
}

fn find_in_mut<'a>(
    items: &'a mut [QuestionnaireItem],
    link_id: &str,
) -> Option<&'a mut QuestionnaireItem> {
    for item in items {
        if item.link_id == link_id {
            return Some(item);
        }
        if let Some(found) = find_in_mut(&mut item.item, link_id) {
            return Some(found);
        }
    }
    None
}
