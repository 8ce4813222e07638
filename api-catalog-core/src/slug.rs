/// Convert a category name to a URL-safe slug.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-`, and never leaves a leading or trailing separator. Names with no
/// ASCII alphanumerics at all produce an empty slug.
pub fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_separator = false;

    for c in s.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            result.push(c);
            last_was_separator = false;
        } else if !last_was_separator && !result.is_empty() {
            result.push('-');
            last_was_separator = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

#[cfg(test)]
#[path = "tests/slug_tests.rs"]
mod tests;
