//! End-to-end checks of questionnaire inspection on FHIR JSON documents.

use fhircore_core::extension_urls::{BARCODE, CQF_LIBRARY, ITEM_EXTRACTION_CONTEXT, PHOTO_CAPTURE};
use fhircore_core::{
    DepthFirst, FieldFilter, FieldType, HasExtensions, ItemType, Questionnaire, QuestionnaireItem,
    prepare_questions_for_reading_or_editing,
};
use serde_json::json;

fn household_registration() -> Questionnaire {
    Questionnaire::from_json(json!({
        "resourceType": "Questionnaire",
        "id": "household-registration",
        "extension": [
            { "url": "cqf-library", "valueCanonical": "Library/household-logic" },
            {
                "url": ITEM_EXTRACTION_CONTEXT,
                "valueExpression": { "language": "application/x-fhir-query", "expression": "Group" }
            }
        ],
        "item": [
            {
                "linkId": "household",
                "type": "group",
                "item": [
                    { "linkId": "household_name", "type": "string", "definition": "Group.name" },
                    { "linkId": "registration_date", "type": "date" },
                    {
                        "linkId": "household_photo",
                        "type": "attachment",
                        "extension": [{ "url": PHOTO_CAPTURE, "valueString": "photo-capture" }]
                    }
                ]
            },
            { "linkId": "head_gender", "type": "choice", "definition": "Patient.gender" },
            { "linkId": "head_marital_status", "type": "choice" },
            {
                "linkId": "card_number",
                "type": "string",
                "readOnly": true,
                "extension": [{ "url": BARCODE, "valueString": "barcode" }]
            }
        ]
    }))
    .expect("Failed to parse questionnaire")
}

#[test]
fn test_extraction_and_libraries() {
    let questionnaire = household_registration();

    assert!(questionnaire.is_extraction_candidate());
    assert!(questionnaire.has_extension(CQF_LIBRARY));
    assert_eq!(questionnaire.cqf_library_ids(), vec!["household-logic".to_string()]);
}

#[test]
fn test_lookups_walk_nested_items() {
    let questionnaire = household_registration();

    assert_eq!(questionnaire.items().count(), 7);
    assert_eq!(
        questionnaire.find("registration_date").and_then(|i| i.item_type),
        Some(ItemType::Date)
    );
    assert!(questionnaire.find("Household").is_none());

    let choices = questionnaire.find_by_field(FieldType::Type, "CHOICE");
    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0].link_id, "head_gender");

    let names = questionnaire.find_by(&FieldFilter::ByDefinition("Group.name".into()));
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].as_label(), "Household name: ");
}

#[test]
fn test_prepare_for_editing_round() {
    let mut questionnaire = household_registration();

    prepare_questions_for_reading_or_editing(&mut questionnaire.item, "QuestionnaireResponse.item", false);

    assert!(!questionnaire.find("card_number").unwrap().read_only);
    assert!(!questionnaire.find("household_photo").unwrap().read_only);

    prepare_questions_for_reading_or_editing(&mut questionnaire.item, "QuestionnaireResponse.item", true);

    assert!(questionnaire.find("card_number").unwrap().read_only);
    assert!(questionnaire.find("household_photo").unwrap().read_only);
    assert!(!questionnaire.find("household").unwrap().read_only);
    assert!(!questionnaire.find("head_gender").unwrap().read_only);
}

#[test]
fn test_serialization_keeps_extensions() {
    let questionnaire = household_registration();
    let value = serde_json::to_value(&questionnaire).unwrap();

    assert_eq!(value["resourceType"], "Questionnaire");
    assert_eq!(value["extension"][0]["valueCanonical"], "Library/household-logic");

    let reparsed = Questionnaire::from_json(value).unwrap();
    assert_eq!(reparsed, questionnaire);
}

#[test]
fn test_items_iterator_is_nameable() {
    fn link_ids(items: DepthFirst<'_>) -> Vec<&str> {
        items.map(|item| item.link_id.as_str()).collect()
    }

    let questionnaire = Questionnaire::new().with_item(
        QuestionnaireItem::new("household").with_item(QuestionnaireItem::new("head")),
    );
    assert_eq!(link_ids(questionnaire.items()), vec!["household", "head"]);
}
