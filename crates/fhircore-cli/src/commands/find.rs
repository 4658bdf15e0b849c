use anyhow::{Context, Result};
use std::path::Path;

use fhircore_core::{FieldType, ItemType, Questionnaire, QuestionnaireItem};

use crate::cli::{FindCriteria, OutputFormat};
use crate::commands::read_questionnaire;
use crate::output::{or_dash, print_report};

/// Items of `questionnaire` matching `criteria`
pub fn find_items<'q>(
    questionnaire: &'q Questionnaire,
    criteria: &FindCriteria,
) -> Result<Vec<&'q QuestionnaireItem>> {
    if let Some(link_id) = &criteria.link_id {
        return Ok(questionnaire.find(link_id).into_iter().collect());
    }
    if let Some(item_type) = &criteria.item_type {
        let item_type: ItemType = item_type
            .parse()
            .with_context(|| format!("Unknown item type '{item_type}'"))?;
        return Ok(questionnaire.find_by_field(FieldType::Type, item_type.name()));
    }
    if let Some(definition) = &criteria.definition {
        return Ok(questionnaire.find_by_field(FieldType::Definition, definition));
    }
    anyhow::bail!("One of --link-id, --type or --definition is required")
}

pub async fn find(path: &Path, criteria: &FindCriteria, format: OutputFormat) -> Result<()> {
    let questionnaire = read_questionnaire(path).await?;
    let items = find_items(&questionnaire, criteria)?;

    let rows = items
        .iter()
        .map(|item| {
            vec![
                item.link_id.clone(),
                or_dash(item.item_type.map(|t| t.name())),
                or_dash(item.text.as_deref()),
                or_dash(item.definition.as_deref()),
            ]
        })
        .collect();
    print_report(&items, &["LinkId", "Type", "Text", "Definition"], rows, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn questionnaire() -> Questionnaire {
        Questionnaire::from_json(json!({
            "resourceType": "Questionnaire",
            "item": [
                { "linkId": "patient", "type": "group", "item": [
                    { "linkId": "gender", "type": "choice", "definition": "http://hl7.org/fhir/StructureDefinition/Patient#Patient.gender" },
                    { "linkId": "religion", "type": "open-choice" }
                ]}
            ]
        }))
        .unwrap()
    }

    fn criteria(link_id: Option<&str>, item_type: Option<&str>, definition: Option<&str>) -> FindCriteria {
        FindCriteria {
            link_id: link_id.map(String::from),
            item_type: item_type.map(String::from),
            definition: definition.map(String::from),
        }
    }

    #[test]
    fn test_find_by_link_id() {
        let q = questionnaire();
        let items = find_items(&q, &criteria(Some("religion"), None, None)).unwrap();
        assert_eq!(items.len(), 1);
        assert!(find_items(&q, &criteria(Some("missing"), None, None)).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_type_name_or_code() {
        let q = questionnaire();
        let by_code = find_items(&q, &criteria(None, Some("open-choice"), None)).unwrap();
        let by_name = find_items(&q, &criteria(None, Some("OPENCHOICE"), None)).unwrap();
        assert_eq!(by_code, by_name);
        assert_eq!(by_code[0].link_id, "religion");

        assert!(find_items(&q, &criteria(None, Some("checkbox"), None)).is_err());
    }

    #[test]
    fn test_find_by_definition() {
        let q = questionnaire();
        let items = find_items(
            &q,
            &criteria(
                None,
                None,
                Some("http://hl7.org/fhir/StructureDefinition/Patient#Patient.gender"),
            ),
        )
        .unwrap();
        assert_eq!(items[0].link_id, "gender");
    }
}
