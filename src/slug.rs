use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC_RUN: Regex = Regex::new("[^a-z0-9]+").unwrap();
}

/// Lowercases `text`, collapses every run of characters outside `[a-z0-9]`
/// into a single hyphen and trims hyphens from both ends.
///
/// Non-ASCII letters are not transliterated: `"Pu\u{f1}a"` becomes `"pu-a"`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
