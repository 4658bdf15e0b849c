//! Questionnaire model and the inspection helpers used by the rendering
//! and extraction flows.
//!
//! Every lookup is total: no match yields `None` or an empty `Vec`, never an
//! error. Item trees are always walked depth-first in document order.

mod filter;
mod inspect;
mod item;
mod label;
mod response;
mod widgets;

pub use filter::{FieldFilter, FieldType};
pub use inspect::Questionnaire;
pub use item::{DepthFirst, ItemInitial, ItemType, QuestionnaireItem};
pub use label::as_label;
pub use response::{QuestionnaireResponse, QuestionnaireResponseItem};
pub use widgets::prepare_questions_for_reading_or_editing;
