//! HTML escaping for rendered table content
//!
//! Cell values and attribute values are emitted verbatim unless an
//! [`EscapePolicy::Html`] is requested. Raw before/after fragments of a cell
//! are never escaped.
//!
//! Escaped characters:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How text is written into the rendered markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapePolicy {
    /// Write text as-is. Callers must not pass untrusted content.
    #[default]
    Raw,
    /// Escape HTML special characters
    Html,
}

impl EscapePolicy {
    /// Apply the policy to a piece of text
    pub fn apply<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match self {
            EscapePolicy::Raw => Cow::Borrowed(s),
            EscapePolicy::Html => escape_html(s),
        }
    }
}

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use tableclass::escape_html;
///
/// assert_eq!(escape_html("<b>'x' & \"y\"</b>"),
///            "&lt;b&gt;&#x27;x&#x27; &amp; &quot;y&quot;&lt;/b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// True if `name` can be written as an HTML attribute name.
///
/// Names must be non-empty and contain no whitespace, control characters,
/// quotes, `<`, `>`, `/`, `=` or `&`.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '&')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_script_tag() {
        assert_eq!(
            escape_html("<script>alert('XSS')</script>"),
            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_html("hello world"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_raw_policy_passthrough() {
        assert_eq!(EscapePolicy::Raw.apply("a < b"), "a < b");
        assert_eq!(EscapePolicy::Html.apply("a < b"), "a &lt; b");
    }

    #[test]
    fn test_attribute_names() {
        assert!(is_valid_attribute_name("data-id"));
        assert!(is_valid_attribute_name("aria-label"));
        assert!(!is_valid_attribute_name(""));
        assert!(!is_valid_attribute_name("a b"));
        assert!(!is_valid_attribute_name("x\" onclick=\"evil"));
        assert!(!is_valid_attribute_name("x>"));
        assert!(!is_valid_attribute_name("a/b"));
    }

    #[test]
    fn test_policy_deserialize() {
        let policy: EscapePolicy = serde_json::from_str("\"html\"").unwrap();
        assert_eq!(policy, EscapePolicy::Html);
    }
}
