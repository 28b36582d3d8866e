//! HTML rendering helpers
//!
//! Templates carry `%TOKEN%` placeholders; rendering is plain string
//! substitution plus a check that the template and the caller agree on
//! the token set.

use crate::errors::{FormsampleError, Result};

/// Substitute every `(token, value)` pair into the template
///
/// Fails if the template contains a `%TOKEN%` the caller did not provide.
/// Only the template is scanned, so substituted values are free to
/// contain `%`.
pub fn render(template: &str, substitutions: &[(&str, String)]) -> Result<String> {
    for token in template_tokens(template) {
        if !substitutions.iter().any(|(t, _)| *t == token) {
            return Err(FormsampleError::render(format!(
                "unreplaced template token: {}",
                token
            )));
        }
    }

    let mut html = template.to_string();
    for (token, value) in substitutions {
        html = html.replace(token, value);
    }
    Ok(html)
}

/// Escape text for interpolation into HTML body or attribute context
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Iterate over the `%UPPER_SNAKE%` placeholders in a template
fn template_tokens(template: &str) -> impl Iterator<Item = &str> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'%' => match start {
                Some(s) if i > s + 1 => {
                    tokens.push(&template[s..=i]);
                    start = None;
                }
                _ => start = Some(i),
            },
            b'A'..=b'Z' | b'_' => {}
            _ => start = None,
        }
    }
    tokens.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_all_tokens() {
        let html = render(
            "<p>%NAME%: %COUNT%</p>",
            &[
                ("%NAME%", "count".to_string()),
                ("%COUNT%", "3".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(html, "<p>count: 3</p>");
    }

    #[test]
    fn test_render_rejects_missing_token() {
        let err = render("<p>%COUNT%</p>", &[]).unwrap_err();
        assert!(err.message().contains("%COUNT%"));
    }

    #[test]
    fn test_percent_in_values_is_not_a_token() {
        let html = render(
            "<p>%VALUE%</p>",
            &[("%VALUE%", "100% done, %STILL_OPEN% left".to_string())],
        )
        .unwrap();
        assert_eq!(html, "<p>100% done, %STILL_OPEN% left</p>");
    }

    #[test]
    fn test_repeated_token_substitutes_everywhere() {
        let html = render(
            "%N% and %N%",
            &[("%N%", "x".to_string())],
        )
        .unwrap();
        assert_eq!(html, "x and x");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
