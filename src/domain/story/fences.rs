//! Markdown fence stripping for model output.

const FENCE: &str = "```";

/// Removes an optional markdown code fence wrapped around model output.
///
/// The text is trimmed first. A leading fence (three backticks, optionally
/// tagged `json`) is removed together with the newline after it, and a
/// trailing fence together with the newline before it. Text that does not
/// start with a fence comes back trimmed and otherwise untouched.
pub fn strip_markdown_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = strip_leading_newline(rest);

    match rest.strip_suffix(FENCE) {
        Some(inner) => strip_trailing_newline(inner),
        None => rest,
    }
}

fn strip_leading_newline(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

fn strip_trailing_newline(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
