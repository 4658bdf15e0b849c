pub mod error;
pub mod extension;
pub mod extension_urls;
pub mod questionnaire;
pub mod time;

pub use error::{CoreError, Result};
pub use extension::{Coding, ElementValue, Expression, Extension, HasExtensions};
pub use questionnaire::{
    DepthFirst, FieldFilter, FieldType, ItemInitial, ItemType, Questionnaire, QuestionnaireItem,
    QuestionnaireResponse, QuestionnaireResponseItem, as_label,
    prepare_questions_for_reading_or_editing,
};
pub use time::FhirDateTime;
