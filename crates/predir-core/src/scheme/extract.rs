//! Scheme extraction from full URLs.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Scheme;

/// Leading scheme token of a URL, matched case-insensitively.
static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9.+-]+:").expect("valid scheme prefix pattern"));

/// True if `url` (ignoring surrounding whitespace) starts with `//`.
///
/// Protocol-relative URLs carry no scheme of their own and are never
/// dispatched to a resolver.
pub fn is_protocol_relative(url: &str) -> bool {
    url.trim().starts_with("//")
}

/// Extracts the lowercased scheme (with trailing colon) from `url`.
///
/// Returns `None` for protocol-relative URLs and for strings without a
/// leading `[a-z0-9.+-]+:` token.
pub fn extract_scheme(url: &str) -> Option<Scheme> {
    if is_protocol_relative(url) {
        return None;
    }
    let token = SCHEME_PREFIX.find(url.trim())?;
    Some(Scheme(token.as_str().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_lowercased_scheme() {
        assert_eq!(extract_scheme("S3://bucket/key").unwrap().as_str(), "s3:");
        assert_eq!(extract_scheme("gdrive:abc").unwrap().as_str(), "gdrive:");
        assert_eq!(
            extract_scheme("  x-custom.v2+tls://host ").unwrap().as_str(),
            "x-custom.v2+tls:"
        );
        assert_eq!(
            extract_scheme("file:///local/file.txt").unwrap().as_str(),
            "file:"
        );
    }

    #[test]
    fn no_scheme() {
        assert!(extract_scheme("invalid-$cheme://x").is_none());
        assert!(extract_scheme("no scheme here").is_none());
        assert!(extract_scheme("").is_none());
        assert!(extract_scheme(":nothing").is_none());
    }

    #[test]
    fn protocol_relative_has_no_scheme() {
        assert!(is_protocol_relative("//google.com"));
        assert!(is_protocol_relative("  //google.com"));
        assert!(!is_protocol_relative("https://google.com"));
        assert!(extract_scheme("//google.com").is_none());
    }
}
