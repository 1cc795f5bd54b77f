//! Text rendering helpers.

/// Draw a single line of text inside an ASCII box.
///
/// ```text
/// +--------------+
/// | 0 - The Fool |
/// +--------------+
/// ```
pub fn boxed(text: &str) -> String {
    let rule = "-".repeat(text.chars().count() + 2);
    format!("+{rule}+\n| {text} |\n+{rule}+")
}
