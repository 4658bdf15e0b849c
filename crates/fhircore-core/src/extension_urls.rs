//! Recognized extension URLs.
//!
//! Every URL that drives questionnaire behavior is matched exactly against
//! one of these constants. Prefix or partial matches are never performed.

/// SDC: questionnaire is extracted through a StructureMap.
pub const STRUCTURE_MAP: &str =
    "http://hl7.org/fhir/uv/sdc/StructureDefinition/sdc-questionnaire-targetStructureMap";

/// SDC: questionnaire is extracted through definition-based item extraction.
pub const ITEM_EXTRACTION_CONTEXT: &str =
    "http://hl7.org/fhir/uv/sdc/StructureDefinition/sdc-questionnaire-itemExtractionContext";

/// Reference to a CQL library evaluated alongside the questionnaire.
pub const CQF_LIBRARY: &str = "cqf-library";

/// Custom widget: capture a photo as the item answer.
pub const PHOTO_CAPTURE: &str =
    "https://github.com/opensrp/android-fhir/StructureDefinition/photo-capture";

/// Custom widget: scan a barcode as the item answer.
pub const BARCODE: &str =
    "https://github.com/opensrp/android-fhir/StructureDefinition/barcode-type-widget-extension";

/// Value carried by [`PHOTO_CAPTURE`] extensions.
pub const PHOTO_CAPTURE_NAME: &str = "photo-capture";

/// Value carried by [`BARCODE`] extensions.
pub const BARCODE_NAME: &str = "barcode";

/// Reference prefix stripped from `cqf-library` values.
pub const LIBRARY_PREFIX: &str = "Library/";

/// URLs marking a questionnaire as an extraction candidate.
pub const EXTRACTION_URLS: [&str; 2] = [STRUCTURE_MAP, ITEM_EXTRACTION_CONTEXT];

/// URLs of custom widgets whose read-only state follows the screen mode.
pub const CUSTOM_WIDGET_URLS: [&str; 2] = [PHOTO_CAPTURE, BARCODE];
