use super::item::QuestionnaireItem;

/// Item field inspected by a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Type,
    Definition,
}

/// Predicate used by [`super::Questionnaire::find_by`].
///
/// Both variants compare exactly: `ByType` against the item type's constant
/// name (`CHOICE`, `DATE`, ...), `ByDefinition` against the item definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldFilter {
    ByType(String),
    ByDefinition(String),
}

impl FieldFilter {
    pub fn new(field: FieldType, value: impl Into<String>) -> Self {
        match field {
            FieldType::Type => Self::ByType(value.into()),
            FieldType::Definition => Self::ByDefinition(value.into()),
        }
    }

    pub fn field(&self) -> FieldType {
        match self {
            Self::ByType(_) => FieldType::Type,
            Self::ByDefinition(_) => FieldType::Definition,
        }
    }

    pub fn matches(&self, item: &QuestionnaireItem) -> bool {
        match self {
            Self::ByType(name) => item.item_type.is_some_and(|t| t.name() == name.as_str()),
            Self::ByDefinition(definition) => item.definition.as_deref() == Some(definition.as_str()),
        }
    }
}
