//! HTML helper functions

use super::url::{is_external_url, url_for};
use crate::config::SiteConfig;

/// Generate an anchor tag
///
/// Off-site targets open in a new browsing context without passing opener
/// or referrer access to the destination. The link text is never altered.
///
/// # Examples
/// ```ignore
/// link_to(&config, "/blog/", "Blog") // -> <a href="/blog/">Blog</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str) -> String {
    if is_external_url(path, config.host()) {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            path,
            html_escape(text)
        )
    } else {
        format!(
            r#"<a href="{}">{}</a>"#,
            url_for(config, path),
            html_escape(text)
        )
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com".to_string(),
            root: "/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_link_to_internal() {
        let config = test_config();
        let html = link_to(&config, "/blog/", "Blog");
        assert_eq!(html, r#"<a href="/blog/">Blog</a>"#);
        assert!(!html.contains("target"));
    }

    #[test]
    fn test_link_to_external() {
        let config = test_config();
        let html = link_to(&config, "https://other.org/page", "Other");
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(">Other</a>"));
    }

    #[test]
    fn test_link_to_same_host() {
        let config = test_config();
        let html = link_to(&config, "https://example.com/about/", "About");
        assert!(!html.contains("target"));
        assert!(!html.contains("rel="));
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a < b & c"), "a &lt; b &amp; c");
    }
}
