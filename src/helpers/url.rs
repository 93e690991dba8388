//! URL helper functions

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::SiteConfig;

lazy_static! {
    /// Absolute HTTP(S) URL pattern. Anything that fails this test is
    /// treated as an internal link, malformed URLs included.
    static ref ABSOLUTE_URL: Regex =
        Regex::new(r"(?i)^(https?)://[^\s/$.?#].[^\s]*$").unwrap();
}

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/") // -> "/blog/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog/my-post/") // -> "https://example.com/blog/my-post/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Extract the host component of an absolute URL
///
/// Returns `None` when the string has no scheme separator.
pub fn url_host(url: &str) -> Option<&str> {
    let rest = url.split_once("://")?.1;
    let end = rest
        .find(['/', '?', '#'])
        .unwrap_or(rest.len());
    let mut host = &rest[..end];

    // Drop userinfo and port
    if let Some(at) = host.rfind('@') {
        host = &host[at + 1..];
    }
    if let Some(colon) = host.find(':') {
        host = &host[..colon];
    }

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Classify a link target as external to the site
///
/// A link is external when it is an absolute HTTP(S) URL whose host is not
/// `site_host`. Relative paths, anchors, mailto links, and malformed URLs
/// are all internal.
pub fn is_external_url(url: &str, site_host: &str) -> bool {
    if !ABSOLUTE_URL.is_match(url) {
        return false;
    }
    match url_host(url) {
        Some(host) => !host.eq_ignore_ascii_case(site_host),
        None => false,
    }
}

/// Percent-encode a URL path component
pub fn encode_url(path: &str) -> String {
    percent_encoding::utf8_percent_encode(path, percent_encoding::NON_ALPHANUMERIC).to_string()
}
