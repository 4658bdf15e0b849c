//! FHIR extensions and the polymorphic `value[x]` element.

use serde::{Deserialize, Serialize};

/// FHIR `Expression` datatype (used by SDC extraction extensions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Expression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// FHIR `Coding` datatype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// The subset of `value[x]` choices carried by questionnaire extensions and
/// initial values.
///
/// Serialized inline with the owning element, e.g. `{"url": "...",
/// "valueString": "Library/123"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementValue {
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueCanonical")]
    Canonical(String),
    #[serde(rename = "valueUri")]
    Uri(String),
    #[serde(rename = "valueCode")]
    Code(String),
    #[serde(rename = "valueDate")]
    Date(String),
    #[serde(rename = "valueDateTime")]
    DateTime(String),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueInteger")]
    Integer(i64),
    #[serde(rename = "valueDecimal")]
    Decimal(f64),
    #[serde(rename = "valueCoding")]
    Coding(Coding),
    #[serde(rename = "valueExpression")]
    Expression(Expression),
}

impl ElementValue {
    /// Primitive string content, for every string-like choice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s)
            | Self::Canonical(s)
            | Self::Uri(s)
            | Self::Code(s)
            | Self::Date(s)
            | Self::DateTime(s) => Some(s),
            Self::Boolean(_)
            | Self::Integer(_)
            | Self::Decimal(_)
            | Self::Coding(_)
            | Self::Expression(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// An open-ended `(url, value)` metadata attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub url: String,
    #[serde(flatten)]
    pub value: Option<ElementValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

impl Extension {
    /// Extension without a value
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            value: None,
            extension: Vec::new(),
        }
    }

    /// Extension carrying a value
    pub fn with_value(url: impl Into<String>, value: ElementValue) -> Self {
        Self {
            url: url.into(),
            value: Some(value),
            extension: Vec::new(),
        }
    }

    /// Extension carrying a `valueString`
    pub fn string(url: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(url, ElementValue::String(value.into()))
    }

    pub fn value_as_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(ElementValue::as_str)
    }
}

/// Elements that can carry extensions.
pub trait HasExtensions {
    fn extensions(&self) -> &[Extension];

    /// True if any extension has exactly this url
    fn has_extension(&self, url: &str) -> bool {
        self.extensions().iter().any(|ext| ext.url == url)
    }

    /// True if any extension url is one of `urls`
    fn has_any_extension(&self, urls: &[&str]) -> bool {
        self.extensions()
            .iter()
            .any(|ext| urls.contains(&ext.url.as_str()))
    }

    /// All extensions with exactly this url, in declaration order
    fn extensions_by_url<'a>(&'a self, url: &'a str) -> impl Iterator<Item = &'a Extension> + 'a {
        self.extensions().iter().filter(move |ext| ext.url == url)
    }
}
