/// Human caption for a link id: `my_test_link` becomes `"My test link: "`.
///
/// Underscores and hyphens become spaces and the first character is
/// upper-cased. The trailing `": "` is always appended, even for an empty
/// link id.
pub fn as_label(link_id: &str) -> String {
    let spaced = link_id.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    let mut label: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    label.push_str(": ");
    label
}
