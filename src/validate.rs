//! Keyword input validation.
//!
//! Cleans a raw block of newline-separated keywords and bounds-checks it
//! before any network activity starts. Validation problems are returned as
//! user-facing message strings, not [`crate::FacetError`] values — bad input
//! is data to show the user, not a fault in the pipeline.

/// Validate and clean a raw keyword block.
///
/// Splits `text` on line breaks, trims each line, and drops blank lines.
/// Returns `(valid_keywords, errors)`:
///
/// - empty or whitespace-only input, zero non-blank lines, or more than
///   `max_keywords` non-blank lines each short-circuit with a single error
///   and an empty keyword list (the list is never truncated to fit);
/// - interior blank lines produce a non-blocking warning naming their
///   1-based positions, with the keywords still returned.
///
/// Keyword order follows input order.
pub fn validate_keywords(text: &str, max_keywords: usize) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        errors.push("Please enter at least one keyword.".to_string());
        return (Vec::new(), errors);
    }

    let lines: Vec<&str> = trimmed.lines().map(str::trim).collect();
    let blank_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_empty())
        .map(|(i, _)| i + 1)
        .collect();
    let keywords: Vec<String> = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();

    if keywords.is_empty() {
        errors.push("Please enter at least one valid keyword.".to_string());
        return (Vec::new(), errors);
    }

    if keywords.len() > max_keywords {
        errors.push(format!(
            "Too many keywords. Maximum allowed: {max_keywords}, provided: {}",
            keywords.len()
        ));
        return (Vec::new(), errors);
    }

    if !blank_lines.is_empty() {
        let positions = blank_lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        errors.push(format!("Empty keywords found at lines: {positions}"));
    }

    (keywords, errors)
}
