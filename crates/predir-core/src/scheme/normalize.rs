//! Scheme normalization and registrable-syntax validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Registrable scheme: at least two of `[a-z0-9+]` followed by a single colon.
static VALID_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9+]{2,}:$").expect("valid scheme pattern"));

/// Normalizes a raw scheme string.
///
/// Trims surrounding whitespace, lowercases, and strips one trailing `//`
/// so that `"S3://"`, `"s3:"` and `" s3: "` all become `"s3:"`. The result is
/// not validated; use [`is_valid_scheme`] for that.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match lowered.strip_suffix("//") {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}

/// True if `scheme` (already normalized) may be registered.
pub fn is_valid_scheme(scheme: &str) -> bool {
    VALID_SCHEME.is_match(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_slashes_and_case() {
        assert_eq!(normalize("S3://"), "s3:");
        assert_eq!(normalize("HTTP://"), "http:");
        assert_eq!(normalize("  gdrive:  "), "gdrive:");
        assert_eq!(normalize("ipfs:"), "ipfs:");
    }

    #[test]
    fn normalize_strips_only_one_trailing_double_slash() {
        assert_eq!(normalize("s3:////"), "s3://");
    }

    #[test]
    fn valid_schemes() {
        for s in ["s3:", "gdrive:", "git+ssh:", "ipfs:", "h2:"] {
            assert!(is_valid_scheme(s), "{s} should be valid");
        }
    }

    #[test]
    fn invalid_schemes() {
        for s in ["", ":", "a:", "s3", "s3::", "x-custom:", "my.scheme:", "S3:", "s3://", "in valid:"] {
            assert!(!is_valid_scheme(s), "{s:?} should be invalid");
        }
    }
}
