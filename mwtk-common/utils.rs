#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Returns `singular` when `count` equals one, `plural` otherwise.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Formats `count` together with the matching noun form, e.g. `1 resource` or `2 resources`.
pub fn count_of(count: usize, singular: &str, plural: &str) -> String {
    format!("{count} {}", pluralize(count, singular, plural))
}

/// Capitalizes the first character of a string slice.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
