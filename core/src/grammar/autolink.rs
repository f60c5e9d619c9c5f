// Autolink classification: `<https://…>` and `<user@host>`

use std::sync::LazyLock;

use regex::Regex;

static URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://\S+$")
        .unwrap_or_else(|e| panic!("invalid uri pattern: {e}"))
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@<>]+@[^\s@<>]+\.[^\s@<>]+$")
        .unwrap_or_else(|e| panic!("invalid email pattern: {e}"))
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Autolink {
    Uri,
    Email,
}

/// Classify the content between `<` and `>`. `None` means the run was not
/// an autolink and must be flushed as literal text.
pub fn classify_autolink(content: &str) -> Option<Autolink> {
    if URI.is_match(content) {
        Some(Autolink::Uri)
    } else if EMAIL.is_match(content) {
        Some(Autolink::Email)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_uri_autolinks() {
        assert_eq!(classify_autolink("https://example.com"), Some(Autolink::Uri));
        assert_eq!(classify_autolink("ftp://host/path"), Some(Autolink::Uri));
        assert_eq!(classify_autolink("x+y://z"), Some(Autolink::Uri));
    }

    #[test]
    fn smoke_test_email_autolinks() {
        assert_eq!(classify_autolink("user@example.com"), Some(Autolink::Email));
        assert_eq!(classify_autolink("a.b@c.d.e"), Some(Autolink::Email));
    }

    #[test]
    fn smoke_test_rejects_plain_text() {
        assert_eq!(classify_autolink("not a link"), None);
        assert_eq!(classify_autolink("example.com"), None);
        assert_eq!(classify_autolink("user@host"), None);
        assert_eq!(classify_autolink(""), None);
    }
}
