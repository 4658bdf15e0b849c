use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::extension::{ElementValue, Extension, HasExtensions};

/// Questionnaire item type (FHIR R4 `item-type` value set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "display")]
    Display,
    #[serde(rename = "question")]
    Question,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "decimal")]
    Decimal,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "dateTime")]
    DateTime,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "choice")]
    Choice,
    #[serde(rename = "open-choice")]
    OpenChoice,
    #[serde(rename = "attachment")]
    Attachment,
    #[serde(rename = "reference")]
    Reference,
    #[serde(rename = "quantity")]
    Quantity,
}

impl ItemType {
    pub const ALL: [ItemType; 17] = [
        Self::Group,
        Self::Display,
        Self::Question,
        Self::Boolean,
        Self::Decimal,
        Self::Integer,
        Self::Date,
        Self::DateTime,
        Self::Time,
        Self::String,
        Self::Text,
        Self::Url,
        Self::Choice,
        Self::OpenChoice,
        Self::Attachment,
        Self::Reference,
        Self::Quantity,
    ];

    /// Constant name used when filtering items by type, e.g. `OPENCHOICE`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Group => "GROUP",
            Self::Display => "DISPLAY",
            Self::Question => "QUESTION",
            Self::Boolean => "BOOLEAN",
            Self::Decimal => "DECIMAL",
            Self::Integer => "INTEGER",
            Self::Date => "DATE",
            Self::DateTime => "DATETIME",
            Self::Time => "TIME",
            Self::String => "STRING",
            Self::Text => "TEXT",
            Self::Url => "URL",
            Self::Choice => "CHOICE",
            Self::OpenChoice => "OPENCHOICE",
            Self::Attachment => "ATTACHMENT",
            Self::Reference => "REFERENCE",
            Self::Quantity => "QUANTITY",
        }
    }

    /// FHIR code as it appears in JSON, e.g. `open-choice`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Display => "display",
            Self::Question => "question",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Time => "time",
            Self::String => "string",
            Self::Text => "text",
            Self::Url => "url",
            Self::Choice => "choice",
            Self::OpenChoice => "open-choice",
            Self::Attachment => "attachment",
            Self::Reference => "reference",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ItemType {
    type Err = CoreError;

    /// Accepts both the constant name (`OPENCHOICE`) and the FHIR code
    /// (`open-choice`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s || t.code() == s)
            .ok_or_else(|| CoreError::invalid_item_type(s))
    }
}

/// Initial answer of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInitial {
    #[serde(flatten)]
    pub value: Option<ElementValue>,
}

impl ItemInitial {
    pub fn new(value: ElementValue) -> Self {
        Self { value: Some(value) }
    }

    pub fn value_string(&self) -> Option<&str> {
        match &self.value {
            Some(ElementValue::String(s)) => Some(s),
            _ => None,
        }
    }
}

/// A single question or group node of a questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItem {
    pub link_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial: Vec<ItemInitial>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<QuestionnaireItem>,
}

impl QuestionnaireItem {
    pub fn new(link_id: impl Into<String>) -> Self {
        Self {
            link_id: link_id.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_initial(mut self, value: ElementValue) -> Self {
        self.initial.push(ItemInitial::new(value));
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn with_item(mut self, child: QuestionnaireItem) -> Self {
        self.item.push(child);
        self
    }

    pub fn is_group(&self) -> bool {
        self.item_type == Some(ItemType::Group)
    }

    /// First initial value, if any
    pub fn initial_first(&self) -> Option<&ItemInitial> {
        self.initial.first()
    }

    /// Caption derived from the link id
    pub fn as_label(&self) -> String {
        super::as_label(&self.link_id)
    }

    /// This item and all of its descendants, depth-first
    pub fn descendants(&self) -> DepthFirst<'_> {
        DepthFirst::new(std::slice::from_ref(self))
    }
}

impl HasExtensions for QuestionnaireItem {
    fn extensions(&self) -> &[Extension] {
        &self.extension
    }
}

/// Pre-order depth-first walk over an item forest
pub struct DepthFirst<'a> {
    stack: Vec<&'a QuestionnaireItem>,
}

impl<'a> DepthFirst<'a> {
    pub(crate) fn new(roots: &'a [QuestionnaireItem]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a QuestionnaireItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.item.iter().rev());
        Some(item)
    }
}
