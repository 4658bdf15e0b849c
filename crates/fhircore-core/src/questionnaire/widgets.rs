use tracing::trace;

use super::item::QuestionnaireItem;
use crate::extension::HasExtensions;
use crate::extension_urls::CUSTOM_WIDGET_URLS;

/// Align custom-widget questions with the screen mode before rendering.
///
/// Every non-group item carrying a photo-capture or barcode extension gets
/// `read_only` set to `read_only`. Group items and items without those
/// extensions keep their flag. Children are visited recursively, `path`
/// being the FHIRPath of `items` within the response being edited.
pub fn prepare_questions_for_reading_or_editing(
    items: &mut [QuestionnaireItem],
    path: &str,
    read_only: bool,
) {
    for item in items.iter_mut() {
        let item_path = format!("{path}.where(linkId = '{}')", item.link_id);

        if !item.is_group() && item.has_any_extension(&CUSTOM_WIDGET_URLS) {
            trace!(path = %item_path, read_only, "forcing custom widget read-only state");
            item.read_only = read_only;
        }

        if !item.item.is_empty() {
            let children_path = children_path(item, &item_path);
            prepare_questions_for_reading_or_editing(&mut item.item, &children_path, read_only);
        }
    }
}

/// Response path of `item`'s children: group children sit under `.item`,
/// question children under the answer as `.answer.item`.
fn children_path(item: &QuestionnaireItem, item_path: &str) -> String {
    if item.is_group() {
        format!("{item_path}.item")
    } else {
        format!("{item_path}.answer.item")
    }
}
