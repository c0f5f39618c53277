use unicode_width::UnicodeWidthChar;

use url::{ParseError, Url};

/// Safely truncate a string, ensuring it is not truncated in the middle of multi-byte characters
///
/// Adds an ellipsis when the display width exceeds `max_width`; the result never
/// exceeds `max_width` columns.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);

        if current_width + char_width + 3 > max_width {
            break;
        }

        result.push(c);
        current_width += char_width;
    }

    result.push_str("...");
    result
}

/// Scheme, host and explicit port of `url`, e.g. `https://example.com:8443`.
pub fn origin_from_url(url: &str) -> Result<String, ParseError> {
    let parsed_url = Url::parse(url)?;
    let scheme = parsed_url.scheme();
    let host = parsed_url.host_str().ok_or(ParseError::EmptyHost)?;

    let port = parsed_url
        .port()
        .map(|x| format!(":{x}"))
        .unwrap_or_default();

    Ok(format!("{scheme}://{host}{port}"))
}

/// Joins `href` onto `origin`. Absolute hrefs come back unchanged (normalized).
pub fn resolve_against_origin(origin: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let base = Url::parse(origin).ok()?;
    base.join(href).ok().map(String::from)
}

/// Trimmed, non-empty text or nothing.
pub fn clean_text(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.contains('\0') {
        None
    } else {
        Some(trimmed.to_string())
    }
}
