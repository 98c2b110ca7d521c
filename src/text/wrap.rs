use crate::foundation::error::QuoteResult;

/// Greedy word-wrap of `text` against `max_width`.
///
/// Paragraphs are separated by `\n`; a whitespace-only paragraph yields one empty line so
/// blank-line spacing survives. Words are never split: a word wider than `max_width` is
/// placed alone on its own line. Errors from `measure` propagate unchanged.
pub fn wrap_text<F>(text: &str, max_width: f32, mut measure: F) -> QuoteResult<Vec<String>>
where
    F: FnMut(&str) -> QuoteResult<f32>,
{
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if measure(&candidate)? > max_width && !current.is_empty() {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
