use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use fhircore_core::Questionnaire;

use crate::cli::OutputFormat;
use crate::commands::read_questionnaire;
use crate::output::{or_dash, print_heading, print_report};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub id: Option<String>,
    pub title: Option<String>,
    pub extraction_candidate: bool,
    pub cqf_library_ids: Vec<String>,
    pub item_count: usize,
    /// Item count per type name; untyped items count under `-`
    pub item_types: BTreeMap<String, usize>,
}

impl InspectReport {
    pub fn new(questionnaire: &Questionnaire) -> Self {
        let mut item_types = BTreeMap::new();
        for item in questionnaire.items() {
            let name = item.item_type.map(|t| t.name()).unwrap_or("-");
            *item_types.entry(name.to_string()).or_insert(0) += 1;
        }
        Self {
            id: questionnaire.id.clone(),
            title: questionnaire.title.clone(),
            extraction_candidate: questionnaire.is_extraction_candidate(),
            cqf_library_ids: questionnaire.cqf_library_ids(),
            item_count: item_types.values().sum(),
            item_types,
        }
    }
}

pub async fn inspect(path: &Path, format: OutputFormat) -> Result<()> {
    let questionnaire = read_questionnaire(path).await?;
    let report = InspectReport::new(&questionnaire);

    if format == OutputFormat::Table {
        print_heading("Questionnaire", &or_dash(report.id.as_deref()));
        print_heading("Title", &or_dash(report.title.as_deref()));
        print_heading("Extraction", &report.extraction_candidate.to_string());
        print_heading("Libraries", &report.cqf_library_ids.join(", "));
        print_heading("Items", &report.item_count.to_string());
    }

    let rows = report
        .item_types
        .iter()
        .map(|(name, count)| vec![name.clone(), count.to_string()])
        .collect();
    print_report(&report, &["Type", "Count"], rows, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_counts_nested_items() {
        let questionnaire = Questionnaire::from_json(json!({
            "resourceType": "Questionnaire",
            "id": "household",
            "extension": [
                { "url": "http://hl7.org/fhir/uv/sdc/StructureDefinition/sdc-questionnaire-targetStructureMap", "valueCanonical": "StructureMap/123" },
                { "url": "cqf-library", "valueCanonical": "Library/456" }
            ],
            "item": [
                { "linkId": "details", "type": "group", "item": [
                    { "linkId": "name", "type": "string" },
                    { "linkId": "nickname", "type": "string" }
                ]},
                { "linkId": "note" }
            ]
        }))
        .unwrap();

        let report = InspectReport::new(&questionnaire);

        assert!(report.extraction_candidate);
        assert_eq!(report.cqf_library_ids, vec!["456"]);
        assert_eq!(report.item_count, 4);
        assert_eq!(report.item_types["STRING"], 2);
        assert_eq!(report.item_types["GROUP"], 1);
        assert_eq!(report.item_types["-"], 1);
    }
}
