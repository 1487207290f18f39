//! Input sanitization for HTML emails and outbound links

use crate::validation::is_email;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("invalid tag pattern"));

/// Escape the five HTML special characters
pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape, then optionally turn newlines into `<br>`
pub fn sanitize_for_html(input: &str, preserve_newlines: bool) -> String {
    let escaped = escape_html(input);
    if preserve_newlines {
        escaped.replace("\r\n", "\n").replace('\n', "<br>")
    } else {
        escaped
    }
}

/// Remove every tag, keeping the text between them
pub fn strip_html(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Returns "" for javascript:, data: and vbscript: links
pub fn sanitize_url(url: &str) -> String {
    let lowered = url.trim().to_ascii_lowercase();
    if ["javascript:", "data:", "vbscript:"]
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return String::new();
    }
    url.to_string()
}

/// Trimmed, lowercased address, or "" when it is not email-shaped
pub fn sanitize_email(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    if is_email(&normalized) {
        normalized
    } else {
        String::new()
    }
}

/// Keep digits, spaces and `+-()`
pub fn sanitize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Shorten to `max_len` characters, ending with "..." when cut
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal decoder for the entities `escape_html` emits
    fn unescape(s: &str) -> String {
        s.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#039;", "'")
            .replace("&amp;", "&")
    }

    mod escaping {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_escapes_all_specials() {
            assert_eq!(
                escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
                "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
            );
        }

        #[test]
        fn test_script_cannot_survive() {
            let inputs = [
                "<script>alert(1)</script>",
                "\"><script src='x'></script>",
                "a & b < c > d ' e \" f",
                "&lt;already&gt;",
            ];
            for input in inputs {
                let escaped = escape_html(input);
                assert!(!escaped.contains('<'));
                assert!(!escaped.contains('>'));
                assert!(!escaped.to_lowercase().contains("<script"));
                assert_eq!(unescape(&escaped), input);
            }
        }

        #[test]
        fn test_newlines_preserved_as_br() {
            assert_eq!(sanitize_for_html("one\ntwo <b>", true), "one<br>two &lt;b&gt;");
            assert_eq!(sanitize_for_html("one\ntwo", false), "one\ntwo");
        }
    }

    mod helpers {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_strip_html() {
            assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
        }

        #[test]
        fn test_sanitize_url_blocks_dangerous_schemes() {
            assert_eq!(sanitize_url(" JavaScript:alert(1)"), "");
            assert_eq!(sanitize_url("data:text/html;base64,xx"), "");
            assert_eq!(sanitize_url("https://pawsnclaws.org"), "https://pawsnclaws.org");
        }

        #[test]
        fn test_sanitize_email() {
            assert_eq!(sanitize_email("  Jane@Example.COM "), "jane@example.com");
            assert_eq!(sanitize_email("not an email"), "");
        }

        #[test]
        fn test_sanitize_phone() {
            assert_eq!(sanitize_phone("(512) 555-0100 ext."), "(512) 555-0100");
        }

        #[test]
        fn test_truncate() {
            assert_eq!(truncate("short", 10), "short");
            assert_eq!(truncate("abcdefghij", 8), "abcde...");
        }
    }
}
