use once_cell::sync::Lazy;
use regex::Regex;

/// Slug used when a title has no word characters at all
pub const FALLBACK_SLUG: &str = "untitled";

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("Invalid slug character regex"));

static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("Invalid slug separator regex"));

/// Derives a filesystem-safe file stem from a title
///
/// Characters other than word characters, whitespace and hyphens are
/// dropped, runs of whitespace and hyphens become a single hyphen, edge
/// hyphens are trimmed and the result is lower-cased.
///
/// # Examples
///
/// ```
/// use actions_harvest::output::slugify;
///
/// assert_eq!(slugify("Order: A!"), "order-a");
/// assert_eq!(slugify("Order A"), "order-a");
/// assert_eq!(slugify("  -- Proclamation on  Day --  "), "proclamation-on-day");
/// ```
pub fn slugify(title: &str) -> String {
    let kept = DISALLOWED.replace_all(title, "");
    let joined = SEPARATOR_RUNS.replace_all(&kept, "-");
    let slug = joined.trim_matches('-').to_lowercase();

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
