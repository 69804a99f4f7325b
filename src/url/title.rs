/// Derives a human-readable title from an article URL
///
/// Takes the last non-empty path segment (ignoring any query or fragment),
/// replaces hyphens with spaces and title-cases the result.
///
/// # Examples
///
/// ```
/// use actions_harvest::url::title_from_url;
///
/// assert_eq!(
///     title_from_url("https://www.whitehouse.gov/presidential-actions/2025/01/some-order"),
///     "Some Order"
/// );
/// ```
pub fn title_from_url(url: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let without_query = without_fragment.split('?').next().unwrap_or_default();

    let segment = without_query
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or_default();

    title_case(&segment.replace('-', " "))
}

/// Upper-cases the first letter of every whitespace-separated word and
/// lower-cases the rest
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            at_word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}
