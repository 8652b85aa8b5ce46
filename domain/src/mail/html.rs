//! HTML helpers for mail bodies

use std::sync::LazyLock;

static SLASH_FRACTION: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(\d+)/(\d+)").expect("fraction pattern is valid")
});

/// Render every `N/D` as a superscript numerator over a subscript denominator.
///
/// Text without a digit-slash-digit pattern comes back unchanged.
pub fn convert_slashes_to_html_fractions(text: &str) -> String {
    SLASH_FRACTION
        .replace_all(text, "<sup>$1</sup>/<sub>$2</sub>")
        .into_owned()
}
